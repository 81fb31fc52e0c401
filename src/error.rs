//! Error types and handling infrastructure for mmstream.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary uses `anyhow` on top of these for
//! application-level context.
//!
//! ## Design Principles
//!
//! - **Distinguishable kinds**: callers can tell "nothing to read" (`NotFound`)
//!   apart from "caller bug" (`OutOfRange`) and handle them differently
//! - **Context preservation**: include the offending path, target, or OS error
//! - **Consistency**: standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for mmstream operations.
///
/// Covers every failure a positional stream can surface: opening and mapping
/// the file, moving the cursor, and rejecting mutation of a read-only stream.
///
/// External truncation or deletion of the backing file after the mapping is
/// established is *not* represented here: touching pages that the OS has
/// invalidated underneath the mapping faults the process. That limitation is
/// documented on [`crate::stream::MappedFileReader`] rather than detected.
#[derive(Error, Debug)]
pub enum StreamError {
    /// Path does not resolve to an existing regular file at open time.
    #[error("File not found or not a regular file: {path}")]
    NotFound { path: PathBuf },

    /// The OS declined to open or map the file (permissions, resource
    /// exhaustion, zero-length file).
    #[error("Memory mapping failed: {message}")]
    MapFailed {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A seek or position-set target fell outside `[0, length]`.
    ///
    /// `target` is `i128` so any `u64` base plus `i64` offset is representable
    /// exactly, including candidates below zero.
    #[error("Seek target {target} is outside the stream bounds [0, {length}]")]
    OutOfRange { target: i128, length: u64 },

    /// A write or length-mutation was attempted on a read-only stream.
    #[error("Operation not supported on a read-only stream: {operation}")]
    Unsupported { operation: &'static str },
}

/// Standard Result type for mmstream operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the mmstream codebase.
pub type Result<T> = std::result::Result<T, StreamError>;

impl StreamError {
    /// Create a NotFound error naming the offending path
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a MapFailed error from an io::Error with additional context
    pub fn map_failed(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::MapFailed {
            message: message.into(),
            source,
        }
    }

    /// Create an OutOfRange error for a rejected cursor target
    pub fn out_of_range(target: i128, length: u64) -> Self {
        Self::OutOfRange { target, length }
    }

    /// Create an Unsupported error naming the rejected operation
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_messages() {
        let not_found = StreamError::not_found(PathBuf::from("/test/data.bin"));
        assert_eq!(
            not_found.to_string(),
            "File not found or not a regular file: /test/data.bin"
        );

        let map_failed = StreamError::map_failed(
            "Failed to map file",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(map_failed.to_string(), "Memory mapping failed: Failed to map file");

        let out_of_range = StreamError::out_of_range(-3, 10);
        assert_eq!(
            out_of_range.to_string(),
            "Seek target -3 is outside the stream bounds [0, 10]"
        );

        let unsupported = StreamError::unsupported("write");
        assert_eq!(
            unsupported.to_string(),
            "Operation not supported on a read-only stream: write"
        );
    }

    #[test]
    fn test_error_constructors() {
        matches!(StreamError::not_found("/x"), StreamError::NotFound { .. });
        matches!(
            StreamError::out_of_range(11, 10),
            StreamError::OutOfRange { .. }
        );
        matches!(
            StreamError::unsupported("set_len"),
            StreamError::Unsupported { .. }
        );
    }

    #[test]
    fn test_map_failed_preserves_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "mmap exhausted");
        let err = StreamError::map_failed("Failed to map file", io_err);

        match err {
            StreamError::MapFailed { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::OutOfMemory);
            }
            _ => panic!("Expected MapFailed variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u64> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
