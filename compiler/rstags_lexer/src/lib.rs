//! Tokenizer for rstags.
//!
//! Turns the bytes of a [`CharSource`] into [`Token`]s, one at a time. The
//! tokenizer knows just enough of the grammar to find declaration
//! boundaries: brackets, a handful of punctuation, keywords, string
//! literals, and comments. Everything else is lumped into identifier
//! tokens.
//!
//! The only way a read fails is [`EndOfInput`], raised when the source runs
//! dry before a new token starts. Parsers propagate it with `?` up to a
//! single catch point in the driver; it is how every pass ends.

mod keywords;
mod token;
mod tokenizer;

pub use keywords::KeywordTable;
pub use rstags_lexer_core::{CharSource, SourceBuffer, SourceReader};
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Tokenizer;

/// The character source ran out while a new token was being started.
///
/// This is not an error in the usual sense: it is the signal that ends a
/// parse pass. Nothing but the top-level driver should ever match on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("end of input")]
pub struct EndOfInput;
