//! Byte reader over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! The reader hands bytes to the tokenizer one at a time and keeps track of
//! the line and offset of the byte it handed out last. It also owns the
//! single byte of push-back the tokenizer relies on.
//!
//! # Trailing Newline
//!
//! A non-empty source that does not end with `\n` yields one synthetic
//! `\n` before reporting end of input. The tokenizer terminates statements
//! on newlines, so without it a declaration on the last line of a file
//! would run straight into end of input instead of being closed like any
//! other line.

use crate::CharSource;

/// A byte handed back to the reader, with the position it was read at.
#[derive(Clone, Copy, Debug)]
struct Pushed {
    byte: u8,
    line: u32,
    offset: u32,
}

/// [`CharSource`] over borrowed source bytes.
///
/// Created via [`SourceBuffer::reader()`](crate::SourceBuffer::reader).
#[derive(Clone, Debug)]
pub struct SourceReader<'a> {
    bytes: &'a [u8],
    /// Index of the next unread byte in `bytes`.
    pos: u32,
    /// Line of the byte at `pos`.
    next_line: u32,
    /// Line of the most recently read byte.
    line: u32,
    /// Offset of the most recently read byte.
    offset: u32,
    pushed: Option<Pushed>,
    /// Whether the synthetic trailing newline is still owed.
    owes_newline: bool,
}

impl<'a> SourceReader<'a> {
    /// Create a reader over `bytes`, starting at byte `start`.
    ///
    /// `bytes.len()` must fit in a `u32`; [`SourceBuffer`](crate::SourceBuffer)
    /// guarantees this.
    pub(crate) fn new(bytes: &'a [u8], start: u32) -> Self {
        debug_assert!(u32::try_from(bytes.len()).is_ok(), "source too large");
        let owes_newline = bytes.len() > start as usize && bytes.last() != Some(&b'\n');
        Self {
            bytes,
            pos: start,
            next_line: 1,
            line: 1,
            offset: start,
            pushed: None,
            owes_newline,
        }
    }

    /// Returns `true` once every byte (and the synthetic newline, if owed)
    /// has been read and nothing is pushed back.
    pub fn is_eof(&self) -> bool {
        self.pushed.is_none() && self.pos as usize >= self.bytes.len() && !self.owes_newline
    }

    /// Source length as `u32`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "bytes.len() fits in u32 per SourceBuffer construction"
    )]
    fn len(&self) -> u32 {
        self.bytes.len() as u32
    }
}

impl CharSource for SourceReader<'_> {
    fn next_char(&mut self) -> Option<u8> {
        if let Some(pushed) = self.pushed.take() {
            self.line = pushed.line;
            self.offset = pushed.offset;
            return Some(pushed.byte);
        }

        if let Some(&byte) = self.bytes.get(self.pos as usize) {
            self.line = self.next_line;
            self.offset = self.pos;
            self.pos += 1;
            if byte == b'\n' {
                self.next_line += 1;
            }
            return Some(byte);
        }

        if self.owes_newline {
            self.owes_newline = false;
            self.line = self.next_line;
            self.offset = self.pos;
            self.next_line += 1;
            return Some(b'\n');
        }

        None
    }

    fn push_back(&mut self, byte: u8) {
        self.pushed = Some(Pushed {
            byte,
            line: self.line,
            offset: self.offset,
        });
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn position(&self) -> u32 {
        self.offset
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "found index < bytes.len() which fits in u32"
    )]
    fn skip_to_char(&mut self, target: u8) {
        if let Some(pushed) = self.pushed.take() {
            self.line = pushed.line;
            self.offset = pushed.offset;
            if pushed.byte == target {
                return;
            }
        }

        let rest = &self.bytes[self.pos as usize..];
        if let Some(index) = memchr::memchr(target, rest) {
            let newlines = memchr::memchr_iter(b'\n', &rest[..index]).count() as u32;
            self.line = self.next_line + newlines;
            self.offset = self.pos + index as u32;
            self.next_line = self.line + u32::from(target == b'\n');
            self.pos += index as u32 + 1;
            return;
        }

        // Not found: drain everything, including the synthetic newline.
        let newlines = memchr::memchr_iter(b'\n', rest).count() as u32;
        if !rest.is_empty() {
            self.line = self.next_line + newlines - u32::from(rest.last() == Some(&b'\n'));
            self.offset = self.len() - 1;
        }
        self.next_line += newlines;
        self.pos = self.len();
        if self.owes_newline {
            self.owes_newline = false;
            self.line = self.next_line;
            self.offset = self.pos;
            self.next_line += 1;
        }
    }
}
