use super::OscalDocument;
use crate::component_definition::domain::ComponentDefinition;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::error::ComponentDefinitionError;
use crate::shared::Result;

/// JsonFormatter adapter producing pretty-printed OSCAL JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &ComponentDefinition) -> Result<String> {
        serde_json::to_string_pretty(&OscalDocument::new(document)).map_err(|e| {
            ComponentDefinitionError::SerializationFailure {
                format: "json".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
