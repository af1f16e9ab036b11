use crate::ports::outbound::DocumentStore;
use crate::shared::error::ComponentDefinitionError;
use crate::shared::security::ensure_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the pointer file holding the file name of the latest document
const LATEST_POINTER: &str = "LATEST";

const MAX_DOCUMENT_ID_LENGTH: usize = 128;

/// FileSystemDocumentStore adapter keeping one file per generated document
///
/// Layout: `<root>/<document-id>.<ext>` plus a `LATEST` pointer file.
/// Both are replaced by rename from a temp file in the same directory, so
/// readers never observe a half-written document.
pub struct FileSystemDocumentStore {
    root: PathBuf,
}

impl FileSystemDocumentStore {
    /// Opens (and creates if needed) a store rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_not_symlink(&root)?;
        fs::create_dir_all(&root).map_err(|e| ComponentDefinitionError::StoreError {
            path: root.clone(),
            details: format!("Failed to create store directory: {}", e),
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn validate_document_id(document_id: &str) -> Result<()> {
        if document_id.is_empty() || document_id.len() > MAX_DOCUMENT_ID_LENGTH {
            return Err(ComponentDefinitionError::Validation {
                message: format!(
                    "document id must be 1 to {} characters long",
                    MAX_DOCUMENT_ID_LENGTH
                ),
            }
            .into());
        }
        if !document_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ComponentDefinitionError::Validation {
                message: format!(
                    "document id '{}' may only contain ASCII letters, digits and hyphens",
                    document_id
                ),
            }
            .into());
        }
        Ok(())
    }

    fn validate_extension(extension: &str) -> Result<()> {
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ComponentDefinitionError::Validation {
                message: format!("invalid document extension '{}'", extension),
            }
            .into());
        }
        Ok(())
    }

    fn file_name(document_id: &str, extension: &str) -> Result<String> {
        Self::validate_document_id(document_id)?;
        Self::validate_extension(extension)?;
        Ok(format!("{}.{}", document_id, extension))
    }

    /// Atomically replaces `<root>/<name>` with `content`
    fn write_atomically(&self, name: &str, content: &str) -> Result<PathBuf> {
        let target = self.root.join(name);
        ensure_not_symlink(&target)?;

        let store_error = |details: String| ComponentDefinitionError::StoreError {
            path: target.clone(),
            details,
        };

        let mut temp = NamedTempFile::new_in(&self.root)
            .map_err(|e| store_error(format!("Failed to create temp file: {}", e)))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|e| store_error(format!("Failed to write temp file: {}", e)))?;
        temp.persist(&target)
            .map_err(|e| store_error(format!("Failed to persist document: {}", e.error)))?;

        Ok(target)
    }

    fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ComponentDefinitionError::StoreError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()),
        }
    }
}

impl DocumentStore for FileSystemDocumentStore {
    fn save(&self, document_id: &str, extension: &str, content: &str) -> Result<PathBuf> {
        let name = Self::file_name(document_id, extension)?;
        let path = self.write_atomically(&name, content)?;
        self.write_atomically(LATEST_POINTER, &name)?;
        Ok(path)
    }

    fn load(&self, document_id: &str, extension: &str) -> Result<Option<String>> {
        let name = Self::file_name(document_id, extension)?;
        self.read_optional(&self.root.join(name))
    }

    fn latest(&self) -> Result<Option<String>> {
        let pointer = match self.read_optional(&self.root.join(LATEST_POINTER))? {
            Some(pointer) => pointer,
            None => return Ok(None),
        };

        let (document_id, extension) =
            pointer
                .trim()
                .rsplit_once('.')
                .ok_or_else(|| ComponentDefinitionError::StoreError {
                    path: self.root.join(LATEST_POINTER),
                    details: format!("Corrupt latest pointer: '{}'", pointer.trim()),
                })?;

        let path = self.root.join(Self::file_name(document_id, extension)?);
        match self.read_optional(&path)? {
            Some(content) => Ok(Some(content)),
            None => Err(ComponentDefinitionError::StoreError {
                path,
                details: "Latest document is missing from the store".to_string(),
            }
            .into()),
        }
    }
}
