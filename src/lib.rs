//! # mmstream - Memory-Mapped Positional Byte Streams
//!
//! Read-only, random-access, byte-oriented streaming over a file using
//! memory-mapped I/O instead of buffered file reads.
//!
//! ## Features
//!
//! - **Zero-copy backing**: the file is mapped, not loaded; pages are pulled
//!   in lazily by the OS on first access
//! - **Positional contract**: a cursor in `[0, length]` with `Start`/
//!   `Current`/`End` seeking and all-or-nothing bounds validation
//! - **Read-only enforcement**: write and resize attempts fail with a typed
//!   error and never touch the file
//! - **Deterministic teardown**: the view and the file handle are released in
//!   order on every exit path, explicit [`MappedFileReader::close`] or drop
//! - **std::io interop**: [`std::io::Read`] and [`std::io::Seek`] adapters so
//!   readers slot into ordinary I/O pipelines
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`stream`] - The positional stream contract and its memory-mapped
//!   implementation
//!
//! [`MappedFileReader::close`]: crate::stream::MappedFileReader::close

// Core modules
pub mod error;
pub mod stream;

// Re-export commonly used types for convenience
pub use error::{Result, StreamError};

// Public API surface for external usage
pub use stream::{MappedFileReader, PositionalStream};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
