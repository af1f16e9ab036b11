use super::OscalDocument;
use crate::component_definition::domain::ComponentDefinition;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::error::ComponentDefinitionError;
use crate::shared::Result;

/// YamlFormatter adapter producing the OSCAL YAML encoding
///
/// This is the default encoding of the generator.
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for YamlFormatter {
    fn format(&self, document: &ComponentDefinition) -> Result<String> {
        serde_yaml_ng::to_string(&OscalDocument::new(document)).map_err(|e| {
            ComponentDefinitionError::SerializationFailure {
                format: "yaml".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn file_extension(&self) -> &'static str {
        "yaml"
    }
}
