//! Path validation performed before a mapping is established.
//!
//! This module provides the precondition check for opening a stream: the path
//! must resolve to an existing regular file before any OS resources are
//! acquired.

use crate::error::{Result, StreamError};
use std::path::Path;

/// Validate that a path refers to an existing regular file.
///
/// # Validations Performed
/// - Path exists
/// - Path points at a regular file (not a directory, socket, or device)
///
/// # Errors
/// - `NotFound` naming the path when either check fails
/// - `MapFailed` when the metadata query itself fails (e.g. a path component
///   is not traversable by the current user)
///
/// Readability is not probed here; the subsequent open reports permission
/// problems as `MapFailed`.
pub fn validate_file_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(StreamError::not_found(path));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| StreamError::map_failed("Failed to query file metadata", e))?;

    if !metadata.is_file() {
        return Err(StreamError::not_found(path));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// Create a test file with specific content
    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content)
            .expect("Failed to write test content");
        file.flush().expect("Failed to flush test file");
        file
    }

    #[test]
    fn test_validate_valid_file() {
        let test_file = create_test_file(b"some bytes");
        assert!(validate_file_path(test_file.path()).is_ok());
    }

    #[test]
    fn test_validate_nonexistent_file() {
        let non_existent = std::path::Path::new("/this/file/does/not/exist.bin");
        let result = validate_file_path(non_existent);

        match result.unwrap_err() {
            StreamError::NotFound { path } => {
                assert_eq!(path, non_existent);
            }
            other => panic!("Expected NotFound for non-existent file, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = validate_file_path(temp_dir.path());

        match result.unwrap_err() {
            StreamError::NotFound { path } => {
                assert_eq!(path, temp_dir.path());
            }
            other => panic!("Expected NotFound for directory, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_file_passes() {
        // Zero-length files are a mapping concern, not a path concern
        let empty_file = create_test_file(&[]);
        assert!(validate_file_path(empty_file.path()).is_ok());
    }
}
