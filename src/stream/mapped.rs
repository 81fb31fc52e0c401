//! Memory-mapped positional stream reader.
//!
//! This module provides the MappedFileReader implementation that maps a file
//! read-only into the process address space and exposes cursor-based
//! sequential and random-access reads over the mapping without copying the
//! file into heap memory.

use crate::error::{Result, StreamError};
use crate::stream::contract::PositionalStream;
use crate::stream::validation::validate_file_path;
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};

/// Read-only positional byte stream over a memory-mapped file.
///
/// Construction maps the whole file; reads copy out of the mapping at the
/// cursor, so pages are loaded lazily by the OS on first access and repeated
/// reads of the same region return identical bytes. The file length is
/// captured once at open time and never re-queried.
///
/// # Limitation
///
/// The backing file must not be truncated or deleted by another process while
/// the mapping is alive. The OS invalidates the affected pages underneath the
/// mapping and touching them faults the process; this type does not detect or
/// recover from that condition.
#[derive(Debug)]
pub struct MappedFileReader {
    /// Read-only view over the mapping.
    ///
    /// Declared before `_file`: struct fields drop in declaration order, so
    /// the view is released before the file handle it was created from.
    mmap: Mmap,

    /// Open handle backing the mapping, held for the lifetime of the view.
    _file: File,

    /// File length in bytes, captured once from metadata at open time.
    length: u64,

    /// Cursor into the stream, always in `[0, length]` inclusive.
    position: u64,

    /// Path the stream was opened from, kept for logging and diagnostics.
    path: PathBuf,
}

impl MappedFileReader {
    /// Open a file and map its full contents read-only.
    ///
    /// # Arguments
    /// * `path` - Path to an existing regular file
    ///
    /// # Returns
    /// * New reader with the cursor at 0
    ///
    /// # Errors
    /// * `NotFound` if the path is not an existing regular file
    /// * `MapFailed` if the file cannot be opened or the OS refuses the
    ///   mapping (permissions, resource limits, zero-length file)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        validate_file_path(path)?;

        let file = File::open(path).map_err(|e| {
            StreamError::map_failed(format!("Failed to open file: {}", path.display()), e)
        })?;

        let length = file
            .metadata()
            .map_err(|e| StreamError::map_failed("Failed to query file metadata", e))?
            .len();

        // mmap of a zero-length range is rejected by some platforms; refuse it
        // up front so the failure mode is the same everywhere.
        if length == 0 {
            return Err(StreamError::map_failed(
                format!("Cannot map zero-length file: {}", path.display()),
                io::Error::new(io::ErrorKind::InvalidInput, "zero-length file"),
            ));
        }

        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| {
                StreamError::map_failed(
                    format!("Failed to memory map file: {}", path.display()),
                    e,
                )
            })?
        };

        debug!("mapped {} ({} bytes)", path.display(), length);

        Ok(Self {
            mmap,
            _file: file,
            length,
            position: 0,
            path: path.to_path_buf(),
        })
    }

    /// Read bytes at the cursor into `buf` and advance the cursor.
    ///
    /// The requested count is `buf.len()`, clamped to the bytes remaining
    /// before end-of-stream so a read never crosses the file end. Returns the
    /// number of bytes copied; 0 once the cursor sits at end-of-stream.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        if self.position >= self.length {
            return 0;
        }

        let count = (buf.len() as u64).min(self.length - self.position) as usize;
        let start = self.position as usize;
        buf[..count].copy_from_slice(&self.mmap[start..start + count]);
        self.position += count as u64;
        count
    }

    /// Move the cursor relative to `Start`, `Current`, or `End`.
    ///
    /// Returns the new position. A target outside `[0, len()]` fails with
    /// `OutOfRange` and leaves the cursor unchanged.
    pub fn seek(&mut self, target: SeekFrom) -> Result<u64> {
        let candidate: i128 = match target {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(offset) => self.position as i128 + offset as i128,
            SeekFrom::End(offset) => self.length as i128 + offset as i128,
        };

        if candidate < 0 || candidate > self.length as i128 {
            return Err(StreamError::out_of_range(candidate, self.length));
        }

        self.position = candidate as u64;
        Ok(self.position)
    }

    /// Current cursor position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Set the cursor to an absolute position.
    ///
    /// Fails with `OutOfRange` if `position > len()`, leaving the cursor
    /// unchanged.
    pub fn set_position(&mut self, position: u64) -> Result<()> {
        if position > self.length {
            return Err(StreamError::out_of_range(position as i128, self.length));
        }
        self.position = position;
        Ok(())
    }

    /// Stream length in bytes, captured once at open time.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Whether the stream contains no bytes.
    ///
    /// Always false for a successfully opened reader, since zero-length files
    /// are rejected at open time.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The path this stream was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full mapped contents as a slice (zero-copy).
    ///
    /// Does not move the cursor. Useful for callers that want direct slice
    /// access instead of cursor-based reads.
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap[..]
    }

    /// No-op: a read-only stream has nothing buffered to flush.
    pub fn flush(&mut self) {}

    /// Release the view and the file handle, in that order.
    ///
    /// Equivalent to dropping the reader; provided for call sites that want
    /// to name the teardown point. Drop performs the same release on every
    /// exit path, so abandoning the reader is always safe.
    pub fn close(self) {}
}

impl Drop for MappedFileReader {
    fn drop(&mut self) {
        debug!("unmapping {} ({} bytes)", self.path.display(), self.length);
    }
}

impl PositionalStream for MappedFileReader {
    const CAN_READ: bool = true;
    const CAN_WRITE: bool = false;
    const CAN_SEEK: bool = true;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(MappedFileReader::read(self, buf))
    }

    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(StreamError::unsupported("write"))
    }

    fn seek(&mut self, target: SeekFrom) -> Result<u64> {
        MappedFileReader::seek(self, target)
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn set_position(&mut self, position: u64) -> Result<()> {
        MappedFileReader::set_position(self, position)
    }

    fn len(&self) -> u64 {
        self.length
    }

    fn set_len(&mut self, _length: u64) -> Result<()> {
        Err(StreamError::unsupported("set_len"))
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// `std::io::Read` adapter so the reader composes into ordinary I/O
/// pipelines. Reads never fail: the count is clamped at end-of-stream.
impl io::Read for MappedFileReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(MappedFileReader::read(self, buf))
    }
}

/// `std::io::Seek` adapter.
///
/// Stricter than the generic `io::Seek` contract: targets past end-of-stream
/// are rejected with `ErrorKind::InvalidInput` instead of being allowed, to
/// keep the cursor inside `[0, len()]` at all times.
impl io::Seek for MappedFileReader {
    fn seek(&mut self, target: SeekFrom) -> io::Result<u64> {
        MappedFileReader::seek(self, target)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }
}
