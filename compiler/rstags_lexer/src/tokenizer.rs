//! Byte-level tokenizer.
//!
//! # Statement Termination
//!
//! The scanned language ends statements with newlines as often as with
//! semicolons, so a newline becomes a [`TokenKind::Terminator`] when the
//! previous token was an identifier, a string, or a closing bracket (see
//! [`TokenKind::ends_statement`]). Anywhere else a newline is whitespace.
//!
//! Comments feed into the same rule: a line comment is replaced by the
//! newline that ends it, and a block comment by a newline if it spanned
//! lines or by a space if it did not.
//!
//! # Left Arrow
//!
//! `<-` is read as a [`TokenKind::LeftArrow`]. A `<` followed by anything
//! else is dropped together with the byte after it, and scanning restarts.
//! No declaration form depends on either token.

use rstags_lexer_core::CharSource;
use tracing::trace;

use crate::{EndOfInput, KeywordTable, Token, TokenKind};

/// Bytes allowed after the first byte of an identifier.
///
/// Bytes from `0x80` up pass through so UTF-8 encoded identifiers are kept
/// whole; they are not validated.
#[inline]
fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'$' | b'@' | b'_' | b'#') || byte >= 0x80
}

/// Reads [`Token`]s from a [`CharSource`].
pub struct Tokenizer<'k, S> {
    source: S,
    keywords: &'k KeywordTable,
    /// Kind of the last token produced, for the terminator rule.
    last_kind: TokenKind,
}

impl<'k, S: CharSource> Tokenizer<'k, S> {
    pub fn new(source: S, keywords: &'k KeywordTable) -> Self {
        Tokenizer {
            source,
            keywords,
            last_kind: TokenKind::None,
        }
    }

    /// Read the next token into `token`, overwriting it.
    ///
    /// Fails with [`EndOfInput`] when the source is exhausted before a new
    /// token starts. A token already started always completes.
    pub fn read_token(&mut self, token: &mut Token) -> Result<(), EndOfInput> {
        token.reset();
        self.scan(token)?;
        self.last_kind = token.kind;
        trace!(
            kind = ?token.kind,
            text = %token.text(),
            line = token.line,
            offset = token.offset,
            "token"
        );
        Ok(())
    }

    fn scan(&mut self, token: &mut Token) -> Result<(), EndOfInput> {
        loop {
            let Some(c) = self.skip_blanks(token)? else {
                token.kind = TokenKind::Terminator;
                return Ok(());
            };

            let kind = match c {
                b'/' => match self.source.next_char() {
                    Some(b'/') => {
                        self.source.skip_to_char(b'\n');
                        self.source.push_back(b'\n');
                        continue;
                    }
                    Some(b'*') => {
                        let spans_lines = self.skip_block_comment();
                        self.source.push_back(if spans_lines { b'\n' } else { b' ' });
                        continue;
                    }
                    next => {
                        if let Some(next) = next {
                            self.source.push_back(next);
                        }
                        TokenKind::ForwardSlash
                    }
                },
                b'"' | b'\'' | b'`' => {
                    self.scan_string(token, c);
                    TokenKind::String
                }
                b'<' => {
                    if self.source.next_char() == Some(b'-') {
                        TokenKind::LeftArrow
                    } else {
                        continue;
                    }
                }
                b'(' => TokenKind::OpenParen,
                b')' => TokenKind::CloseParen,
                b'{' => TokenKind::OpenCurly,
                b'}' => TokenKind::CloseCurly,
                b'[' => TokenKind::OpenSquare,
                b']' => TokenKind::CloseSquare,
                b'*' => TokenKind::Star,
                b'&' => TokenKind::Ampersand,
                b'~' => TokenKind::Sigil,
                b'.' => TokenKind::Dot,
                b',' => TokenKind::Comma,
                _ => {
                    self.scan_identifier(token, c);
                    token.keyword = self.keywords.lookup(&token.text);
                    if token.keyword.is_some() {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Identifier
                    }
                }
            };
            token.kind = kind;
            return Ok(());
        }
    }

    /// Skip whitespace and record the position of the first significant
    /// byte in `token`.
    ///
    /// Returns `Ok(None)` when a newline terminates the statement.
    fn skip_blanks(&mut self, token: &mut Token) -> Result<Option<u8>, EndOfInput> {
        loop {
            let c = self.source.next_char();
            token.line = self.source.line();
            token.offset = self.source.position();
            match c {
                Some(b'\n') if self.last_kind.ends_statement() => return Ok(None),
                Some(b' ' | b'\t' | b'\r' | b'\n') => {}
                Some(c) => return Ok(Some(c)),
                None => return Err(EndOfInput),
            }
        }
    }

    /// Skip the rest of a block comment after its opening `/*`.
    ///
    /// Block comments do not nest. Returns `true` if a newline occurred
    /// inside the comment.
    fn skip_block_comment(&mut self) -> bool {
        let mut spans_lines = false;
        loop {
            loop {
                match self.source.next_char() {
                    None | Some(b'*') => break,
                    Some(b'\n') => spans_lines = true,
                    Some(_) => {}
                }
            }
            match self.source.next_char() {
                Some(b'/') | None => return spans_lines,
                Some(c) => self.source.push_back(c),
            }
        }
    }

    /// Scan a literal after its opening `delimiter` into `token.text`.
    ///
    /// Backtick literals are raw. In the others a backslash copies the next
    /// byte through as-is; escapes are not interpreted.
    fn scan_string(&mut self, token: &mut Token, delimiter: u8) {
        while let Some(c) = self.source.next_char() {
            if c == b'\\' && delimiter != b'`' {
                if let Some(escaped) = self.source.next_char() {
                    token.text.push(escaped);
                }
            } else if c == delimiter {
                break;
            } else {
                token.text.push(c);
            }
        }
    }

    /// Scan an identifier starting with `first` into `token.text`.
    ///
    /// `first` is taken as-is, whatever it is. The byte that ends the
    /// identifier is pushed back since it may be a newline.
    fn scan_identifier(&mut self, token: &mut Token, first: u8) {
        token.text.push(first);
        while let Some(c) = self.source.next_char() {
            if is_ident_byte(c) {
                token.text.push(c);
            } else {
                self.source.push_back(c);
                break;
            }
        }
    }
}
