//! Bracket matching.

use rstags_lexer::{CharSource, Token};
use tracing::trace;

use crate::{ParseResult, Parser, TagSink};

impl<S: CharSource, T: TagSink + ?Sized> Parser<'_, S, T> {
    /// Skip from an opening bracket past its matching closing bracket.
    ///
    /// On return `token` is the token after the closing bracket. Only
    /// brackets of the entry kind are counted: while matching `(`, braces
    /// and square brackets are ordinary tokens. A no-op unless `token` is
    /// `(`, `{` or `[`.
    pub(crate) fn skip_to_matched(&mut self, token: &mut Token) -> ParseResult {
        let open = token.kind;
        let Some(close) = open.closing() else {
            return Ok(());
        };

        let (line, offset) = (token.line, token.offset);
        let mut depth = 1u32;
        while !(token.is(close) && depth == 0) {
            self.read(token)?;
            if token.is(open) {
                depth += 1;
            }
            if token.is(close) && depth > 0 {
                depth -= 1;
            }
        }
        trace!(?open, line, offset, end_line = token.line, "matched");

        self.read(token)
    }
}
