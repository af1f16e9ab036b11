use crate::shared::error::ComponentDefinitionError;
use std::fs;
use std::path::Path;

/// Maximum size of a control inventory we are willing to load (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` can safely be read as an input file and returns its size.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected rather than its
/// target. Symbolic links, non-regular files and files above [`MAX_FILE_SIZE`]
/// are rejected.
pub fn inspect_input_file(path: &Path) -> Result<u64, ComponentDefinitionError> {
    let metadata =
        fs::symlink_metadata(path).map_err(|e| ComponentDefinitionError::SourceUnavailable {
            source_name: path.display().to_string(),
            details: e.to_string(),
        })?;

    if metadata.is_symlink() {
        return Err(ComponentDefinitionError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input path is a symbolic link".to_string(),
            hint: "Pass the CSV file itself instead of a link to it".to_string(),
        });
    }

    if !metadata.is_file() {
        return Err(ComponentDefinitionError::SourceUnavailable {
            source_name: path.display().to_string(),
            details: "not a regular file".to_string(),
        });
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(ComponentDefinitionError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                MAX_FILE_SIZE
            ),
            hint: "Split the control inventory into smaller files".to_string(),
        });
    }

    Ok(metadata.len())
}

/// Refuses to write through an existing symbolic link.
///
/// A missing path is fine: the caller is about to create it.
pub fn ensure_not_symlink(path: &Path) -> Result<(), ComponentDefinitionError> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(ComponentDefinitionError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Writing through symbolic links is not allowed; choose a regular path"
                .to_string(),
        }),
        _ => Ok(()),
    }
}
