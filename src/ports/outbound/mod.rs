/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, randomness).
pub mod control_source;
pub mod document_store;
pub mod formatter;
pub mod id_generator;
pub mod output_presenter;
pub mod progress_reporter;

pub use control_source::ControlSource;
pub use document_store::DocumentStore;
pub use formatter::DocumentFormatter;
pub use id_generator::IdGenerator;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
