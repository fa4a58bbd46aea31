//! Owned source bytes for one input file.
//!
//! The buffer keeps the raw bytes exactly as read. Files are not required
//! to be valid UTF-8: identifiers pass high bytes through untouched, so the
//! tokenizer works on bytes and the buffer never validates them.
//!
//! # Byte Order Mark
//!
//! A leading UTF-8 BOM (`0xEF 0xBB 0xBF`) is detected at construction and
//! skipped by the reader. Offsets handed out by the reader still count from
//! the very first byte of the file, BOM included.

use crate::SourceReader;

/// UTF-8 byte order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Owned bytes of a single source file.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    /// Length of the content handed to readers. Saturates at `u32::MAX`.
    source_len: u32,
    /// Offset of the first byte after a leading BOM (0 when there is none).
    content_start: u32,
}

impl SourceBuffer {
    /// Create a buffer from source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes().to_vec())
    }

    /// Create a buffer from raw file bytes.
    ///
    /// Files larger than `u32::MAX` bytes (~4 GiB) are truncated to that
    /// length; positions are carried as `u32` throughout.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let content_start = if bytes.starts_with(&UTF8_BOM) { 3 } else { 0 };
        Self {
            bytes,
            source_len,
            content_start,
        }
    }

    /// Returns the source bytes, BOM included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.source_len as usize]
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Returns `true` if the source starts with a UTF-8 byte order mark.
    pub fn has_bom(&self) -> bool {
        self.content_start != 0
    }

    /// Create a [`SourceReader`] positioned after any byte order mark.
    pub fn reader(&self) -> SourceReader<'_> {
        SourceReader::new(self.as_bytes(), self.content_start)
    }
}

#[cfg(test)]
mod tests;
