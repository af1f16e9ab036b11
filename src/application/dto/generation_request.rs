/// GenerationRequest - Request DTO for the component definition use case
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Report per-row progress while building the document
    pub show_row_progress: bool,
}

impl GenerationRequest {
    pub fn new(show_row_progress: bool) -> Self {
        Self { show_row_progress }
    }
}
