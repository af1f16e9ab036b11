use crate::shared::Result;

/// OutputPresenter port for presenting the encoded document
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the encoded document
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link
    /// - The parent directory does not exist
    fn present(&self, content: &str) -> Result<()>;
}
