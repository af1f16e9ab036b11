/// Data Transfer Objects for application layer
mod generation_request;
mod generation_response;
mod output_format;

pub use generation_request::GenerationRequest;
pub use generation_response::GenerationResponse;
pub use output_format::OutputFormat;
