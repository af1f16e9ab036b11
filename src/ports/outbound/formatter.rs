use crate::component_definition::domain::ComponentDefinition;
use crate::shared::Result;

/// DocumentFormatter port for encoding a component definition
///
/// Encoding is one-way; nothing in this crate parses documents back.
pub trait DocumentFormatter {
    /// Encodes the document under the `component-definition` root key
    ///
    /// # Errors
    /// Returns `SerializationFailure` if the encoder rejects the document
    fn format(&self, document: &ComponentDefinition) -> Result<String>;

    /// File extension used when the encoded document is stored
    fn file_extension(&self) -> &'static str;
}
