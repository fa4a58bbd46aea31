//! Character source for the rstags tokenizer.
//!
//! The tokenizer never touches files or buffers directly. It pulls bytes
//! through the [`CharSource`] trait, which gives it exactly what it needs:
//! one byte at a time, one byte of push-back, the line and byte offset of
//! the byte it just read, and a fast skip to a target byte (used for line
//! comments).
//!
//! [`SourceBuffer`] owns the bytes of one input file and hands out a
//! [`SourceReader`], the `CharSource` used by the rest of the workspace.

mod reader;
mod source_buffer;

pub use reader::SourceReader;
pub use source_buffer::SourceBuffer;

/// A byte-oriented character source with one byte of push-back.
///
/// Positions refer to the most recently read byte: after `next_char`
/// returns `Some(b)`, [`line`](Self::line) is the 1-based line `b` sits on
/// and [`position`](Self::position) its byte offset. Bytes are not decoded;
/// multi-byte UTF-8 sequences come through one byte at a time.
pub trait CharSource {
    /// Read the next byte, or `None` once the source is exhausted.
    fn next_char(&mut self) -> Option<u8>;

    /// Push one byte back so the next [`next_char`](Self::next_char)
    /// returns it again.
    ///
    /// Only one byte of push-back is supported; pushing twice without an
    /// intervening read replaces the first byte.
    fn push_back(&mut self, byte: u8);

    /// Line of the most recently read byte (1-based).
    fn line(&self) -> u32;

    /// Byte offset of the most recently read byte.
    fn position(&self) -> u32;

    /// Consume bytes up to and including the next `target`, or to the end
    /// of the source if `target` never occurs.
    fn skip_to_char(&mut self, target: u8);
}
