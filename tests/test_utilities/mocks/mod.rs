/// Mock implementations for testing
mod mock_control_source;
mod mock_progress_reporter;
mod sequential_id_generator;

pub use mock_control_source::MockControlSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use sequential_id_generator::SequentialIdGenerator;
