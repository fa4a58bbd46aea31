//! Type expression skipping.
//!
//! Consumes one type without understanding it. Recognized forms:
//!
//! ```text
//! Type      = "(" ... ")"
//!           | identifier [ "." identifier ]
//!           | ( "struct" | "trait" | "enum" ) "{" ... "}"
//!           | "[" ... "]" Type
//!           | ( "*" | "&" | "~" ) Type
//!           | "fn" "(" ... ")" [ Type ]
//! ```
//!
//! Anything else ends the type, which makes a missing result type after a
//! function signature a no-op.

use rstags_lexer::{CharSource, Keyword, Token, TokenKind};

use crate::{ParseResult, Parser, TagSink};

impl<S: CharSource, T: TagSink + ?Sized> Parser<'_, S, T> {
    /// Skip one type expression starting at `token`, leaving `token` on
    /// whatever follows it.
    pub(crate) fn skip_type(&mut self, token: &mut Token) -> ParseResult {
        loop {
            match token.kind {
                TokenKind::OpenParen => return self.skip_to_matched(token),
                TokenKind::Identifier => {
                    self.read(token)?;
                    if token.is(TokenKind::Dot) {
                        // Qualified name: skip the dot and the second name.
                        self.read(token)?;
                        self.read(token)?;
                    }
                    return Ok(());
                }
                TokenKind::Keyword => match token.keyword {
                    Some(Keyword::Struct | Keyword::Trait | Keyword::Enum) => {
                        self.read(token)?;
                        return self.skip_to_matched(token);
                    }
                    Some(Keyword::Fn) => {
                        self.read(token)?;
                        self.skip_to_matched(token)?;
                    }
                    _ => return Ok(()),
                },
                // Array or slice prefix; the element type follows.
                TokenKind::OpenSquare => self.skip_to_matched(token)?,
                // Pointer, reference or sigil prefix.
                TokenKind::Star | TokenKind::Ampersand | TokenKind::Sigil => self.read(token)?,
                _ => return Ok(()),
            }
        }
    }
}
