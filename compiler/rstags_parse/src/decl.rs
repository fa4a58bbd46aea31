//! Declaration parsing.
//!
//! The driver loop reads tokens and dispatches on three keywords:
//!
//! ```text
//! FunctionDecl = "fn" [ "(" ... ")" ] identifier "(" ... ")" [ Type ] [ "{" ... "}" ]
//! TypeDecl     = "type" ( Spec | "(" { Spec Terminator } ")" )
//! LetDecl      = "let"  ( Spec | "(" { Spec Terminator } ")" )
//! Spec         = Name { "," Name } [ Type ] ... Terminator
//! Name         = [ "mut" ] token
//! ```
//!
//! Every other token, keyword or not, is skipped.

use std::convert::Infallible;

use rstags_lexer::{CharSource, Keyword, Token, TokenKind};
use tracing::debug;

use crate::{ParseResult, Parser, TagKind, TagSink};

impl<S: CharSource, T: TagSink + ?Sized> Parser<'_, S, T> {
    /// Dispatch declarations until the input runs out.
    ///
    /// Never returns `Ok`: the loop only ends through [`EndOfInput`](rstags_lexer::EndOfInput).
    pub(crate) fn parse_declarations(&mut self, token: &mut Token) -> ParseResult<Infallible> {
        loop {
            self.read(token)?;
            match token.keyword {
                Some(Keyword::Fn) => self.parse_function(token)?,
                Some(Keyword::Type) => self.parse_binding(token, TagKind::TypeAlias)?,
                Some(Keyword::Let) => self.parse_binding(token, TagKind::Let)?,
                _ => {}
            }
        }
    }

    /// Parse a function or method declaration after `fn`.
    ///
    /// A parenthesized group directly after `fn` is a receiver and is
    /// skipped before the name. The tag is emitted once the signature and
    /// body have been consumed, at the position of the name.
    pub(crate) fn parse_function(&mut self, token: &mut Token) -> ParseResult {
        let mut name = Token::new();

        self.read(&mut name)?;
        if name.is(TokenKind::OpenParen) {
            self.skip_to_matched(&mut name)?;
        }
        if !name.is(TokenKind::Identifier) {
            // `fn` in a type position such as a struct field; not a declaration.
            debug!(kind = ?name.kind, line = name.line, "fn without a name");
            return Ok(());
        }

        // Parameters.
        self.read(token)?;
        self.skip_to_matched(token)?;

        // Result type, if any.
        self.skip_type(token)?;

        // Body, absent for a bare signature.
        if token.is(TokenKind::OpenCurly) {
            self.skip_to_matched(token)?;
        }

        self.emit(&name, TagKind::Function);
        Ok(())
    }

    /// Parse the names of a `type` or `let` declaration and skip the rest
    /// of it, emitting one tag of `kind` per name.
    ///
    /// Names may be comma-separated and may be grouped in parentheses.
    /// A group is either a tuple of names sharing one type and initializer
    /// (`let (a, b) = pair`), closed by the `)` right after the names, or
    /// a list of specs each ending at a terminator, closed by a `)` in
    /// name position.
    pub(crate) fn parse_binding(&mut self, token: &mut Token, kind: TagKind) -> ParseResult {
        let mut name = Token::new();

        self.read_name(&mut name)?;
        let grouped = name.is(TokenKind::OpenParen);
        if grouped {
            self.read_name(&mut name)?;
        }

        loop {
            self.emit(&name, kind);
            self.read(token)?;
            if token.is(TokenKind::Comma) {
                self.read_name(&mut name)?;
                continue;
            }
            let group_closed = grouped && token.is(TokenKind::CloseParen);

            self.skip_type(token)?;
            self.skip_to_terminator(token)?;

            if !grouped || group_closed {
                return Ok(());
            }
            self.read_name(&mut name)?;
            if name.is(TokenKind::CloseParen) {
                return Ok(());
            }
        }
    }

    /// Read a binding name, stepping over a leading `mut`.
    fn read_name(&mut self, name: &mut Token) -> ParseResult {
        self.read(name)?;
        if name.is_keyword(Keyword::Mut) {
            self.read(name)?;
        }
        Ok(())
    }

    /// Advance to the next statement terminator, skipping bracketed groups
    /// whole so terminators inside them do not count.
    fn skip_to_terminator(&mut self, token: &mut Token) -> ParseResult {
        while !token.is(TokenKind::Terminator) {
            self.read(token)?;
            self.skip_to_matched(token)?;
        }
        Ok(())
    }
}
