use crate::shared::Result;
use std::path::PathBuf;

/// DocumentStore port for keeping generated documents
///
/// Artifacts are keyed by document id, so concurrent generations never
/// overwrite each other. The store additionally remembers which document
/// was saved last.
pub trait DocumentStore {
    /// Saves encoded content under `document_id` and marks it as the latest document
    ///
    /// # Returns
    /// Location of the stored artifact
    ///
    /// # Errors
    /// Returns an error if the id is not a safe file name or the write fails.
    /// A failed save leaves no partially written artifact behind.
    fn save(&self, document_id: &str, extension: &str, content: &str) -> Result<PathBuf>;

    /// Loads a previously saved document, `None` if it was never stored
    fn load(&self, document_id: &str, extension: &str) -> Result<Option<String>>;

    /// Loads the most recently saved document, `None` if the store is empty
    fn latest(&self) -> Result<Option<String>>;
}
