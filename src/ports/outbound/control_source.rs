use crate::shared::error::ComponentDefinitionError;

/// ControlSource port for reading the tabular control inventory
///
/// This port abstracts where the rows come from (a CSV file on disk,
/// uploaded bytes, ...). The header row is consumed by the implementation.
pub trait ControlSource {
    /// Reads all data rows in input order
    ///
    /// # Returns
    /// Raw column values of every row after the header. Rows are not
    /// validated here; short rows are reported by the builder.
    ///
    /// # Errors
    /// Returns `SourceUnavailable` if:
    /// - The source cannot be opened
    /// - The header row is missing
    /// - A record cannot be read (I/O or encoding failure)
    fn read_rows(&self) -> Result<Vec<Vec<String>>, ComponentDefinitionError>;

    /// Human-readable name of the source used in progress messages
    fn describe(&self) -> String;
}
