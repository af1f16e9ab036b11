use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets callers (CI jobs, upload handlers shelling out to the binary) tell
/// argument mistakes apart from transformation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Document generated (or retrieved) successfully
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable source, malformed row, serialization or I/O failure)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while turning a control inventory into a component definition.
///
/// The first three variants are the transformation taxonomy proper and are
/// returned as-is by the row source and the builder. The remaining variants
/// belong to the surrounding I/O (presenters and the document store).
#[derive(Debug, Error)]
pub enum ComponentDefinitionError {
    #[error("Control source is unavailable: {source_name}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists, is readable and starts with a header row")]
    SourceUnavailable {
        source_name: String,
        details: String,
    },

    #[error("Malformed control row {row}: expected at least 3 columns (control id, component name, description), found {columns}\n\n💡 Hint: Every data row must provide the control acronym, the component name and the control description")]
    MalformedInput { row: usize, columns: usize },

    #[error("Failed to serialize component definition as {format}\nDetails: {details}")]
    SerializationFailure { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Document store error: {path}\nDetails: {details}")]
    StoreError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for identifiers and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
