//! Positional stream abstraction over memory-mapped files.
//!
//! This module provides the core streaming functionality for mmstream: the
//! [`PositionalStream`] capability contract, the [`MappedFileReader`]
//! implementation backed by a read-only memory mapping, and path validation
//! performed before a mapping is established.

pub mod contract;
pub mod mapped;
pub mod validation;

pub use contract::PositionalStream;
pub use mapped::MappedFileReader;
pub use validation::validate_file_path;
