use crate::shared::error::DepsError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any file read by the tool (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(DepsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link. {} operations on symbolic links are not allowed.",
                operation
            ),
            hint: "Point at the real file instead of the link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        return Err(DepsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point at the real file instead of the link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DepsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is not a regular file", file_description),
            hint: "Only regular files are read".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DepsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Check that the path points at a restore output file".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a file as UTF-8 after running every check above.
pub fn read_checked_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let file_size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?
        .len();
    validate_file_size(file_size, path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}
