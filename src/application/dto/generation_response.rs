use crate::component_definition::domain::ComponentDefinition;

/// GenerationResponse - Response DTO from the component definition use case
///
/// Carries the in-memory document; encoding and persistence are left to the caller.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub document: ComponentDefinition,
    /// Number of data rows read from the source
    pub row_count: usize,
}

impl GenerationResponse {
    pub fn new(document: ComponentDefinition, row_count: usize) -> Self {
        Self {
            document,
            row_count,
        }
    }

    pub fn document_id(&self) -> &str {
        self.document.uuid()
    }
}
