use crate::ports::outbound::ControlSource;
use crate::shared::error::ComponentDefinitionError;
use crate::shared::security::inspect_input_file;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

enum Input {
    File(PathBuf),
    Memory { name: String, bytes: Vec<u8> },
}

/// CsvControlReader adapter reading the control inventory from CSV
///
/// The first record is the header and is discarded. Rows may have any
/// number of columns; short rows are left for the builder to reject so
/// the error can name the offending row.
pub struct CsvControlReader {
    input: Input,
}

impl CsvControlReader {
    /// Reads from a CSV file on disk
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::File(path.into()),
        }
    }

    /// Reads from CSV content already held in memory (e.g. an uploaded file)
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            input: Input::Memory {
                name: name.into(),
                bytes: bytes.into(),
            },
        }
    }

    fn parse<R: Read>(
        source_name: &str,
        reader: R,
    ) -> Result<Vec<Vec<String>>, ComponentDefinitionError> {
        let unavailable = |details: String| ComponentDefinitionError::SourceUnavailable {
            source_name: source_name.to_string(),
            details,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = reader.records();

        match records.next() {
            Some(Ok(_header)) => {}
            Some(Err(e)) => return Err(unavailable(format!("failed to read header row: {}", e))),
            None => return Err(unavailable("missing header row".to_string())),
        }

        records
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(|e| unavailable(e.to_string()))
            })
            .collect()
    }
}

impl ControlSource for CsvControlReader {
    fn read_rows(&self) -> Result<Vec<Vec<String>>, ComponentDefinitionError> {
        match &self.input {
            Input::File(path) => {
                inspect_input_file(path)?;
                let file = File::open(path).map_err(|e| {
                    ComponentDefinitionError::SourceUnavailable {
                        source_name: path.display().to_string(),
                        details: e.to_string(),
                    }
                })?;
                Self::parse(&path.display().to_string(), file)
            }
            Input::Memory { name, bytes } => Self::parse(name, bytes.as_slice()),
        }
    }

    fn describe(&self) -> String {
        match &self.input {
            Input::File(path) => path.display().to_string(),
            Input::Memory { name, .. } => name.clone(),
        }
    }
}
