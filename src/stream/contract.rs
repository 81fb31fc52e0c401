//! Core positional stream abstraction.
//!
//! This module defines the PositionalStream trait that provides a consistent
//! interface for byte streams addressable by position. Capabilities are
//! expressed as associated constants, so "can this stream write" is answered
//! at compile time rather than through runtime dispatch.

use crate::error::Result;
use std::io::SeekFrom;

/// Core trait for position-addressable byte streams.
///
/// A positional stream owns a cursor in `[0, len()]` inclusive; `position() ==
/// len()` denotes end-of-stream. Implementations that lack a capability
/// (writing, resizing) reject the corresponding operations with
/// [`crate::StreamError::Unsupported`] without mutating any state.
pub trait PositionalStream {
    /// Whether the stream supports `read`.
    const CAN_READ: bool;

    /// Whether the stream supports `write` and `set_len`.
    const CAN_WRITE: bool;

    /// Whether the stream supports `seek` and `set_position`.
    const CAN_SEEK: bool;

    /// Read bytes at the cursor into `buf`, advancing the cursor.
    ///
    /// # Returns
    /// * Number of bytes copied, clamped to the bytes remaining before
    ///   end-of-stream
    /// * 0 once the cursor sits at end-of-stream (not an error)
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write bytes at the cursor.
    ///
    /// Read-only streams fail with `Unsupported` and leave the cursor and the
    /// underlying bytes untouched.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Move the cursor relative to `Start`, `Current`, or `End`.
    ///
    /// # Returns
    /// * The new cursor position on success
    /// * `OutOfRange` if the target falls outside `[0, len()]`; the cursor is
    ///   left unchanged
    fn seek(&mut self, target: SeekFrom) -> Result<u64>;

    /// Current cursor position. Pure accessor, no side effect.
    fn position(&self) -> u64;

    /// Set the cursor to an absolute position.
    ///
    /// Equivalent to `seek(SeekFrom::Start(position))`: validates
    /// `position <= len()` and fails with `OutOfRange` otherwise, leaving the
    /// cursor unchanged on failure.
    fn set_position(&mut self, position: u64) -> Result<()>;

    /// Total stream length in bytes. O(1), no I/O.
    fn len(&self) -> u64;

    /// Whether the stream contains no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Change the stream length.
    ///
    /// Fixed-length streams fail with `Unsupported` without mutating state.
    fn set_len(&mut self, length: u64) -> Result<()>;

    /// Flush buffered state to the underlying storage.
    ///
    /// Streams with nothing buffered treat this as a no-op and always succeed.
    fn flush(&mut self) -> Result<()>;
}
