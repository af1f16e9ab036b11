/// Formatter adapters for the supported document encodings
mod json_formatter;
mod yaml_formatter;

pub use json_formatter::JsonFormatter;
pub use yaml_formatter::YamlFormatter;

use crate::component_definition::domain::ComponentDefinition;
use serde::Serialize;

/// Top-level OSCAL wrapper shared by every encoding
#[derive(Debug, Serialize)]
struct OscalDocument<'a> {
    #[serde(rename = "component-definition")]
    component_definition: &'a ComponentDefinition,
}

impl<'a> OscalDocument<'a> {
    fn new(component_definition: &'a ComponentDefinition) -> Self {
        Self {
            component_definition,
        }
    }
}
