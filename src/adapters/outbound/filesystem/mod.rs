/// Filesystem adapters for file I/O operations
mod csv_reader;
mod document_store;
mod file_writer;

pub use csv_reader::CsvControlReader;
pub use document_store::FileSystemDocumentStore;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
