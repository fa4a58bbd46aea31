//! Declaration scanner for rstags.
//!
//! Reads tokens one at a time and reports function, type alias and local
//! binding declarations as [`Tag`]s. There is no syntax tree: anything that
//! is not a declaration is skipped by matching brackets and by a loose
//! "skip one type expression" routine, which is enough to keep nested
//! punctuation from being mistaken for declaration boundaries.
//!
//! A pass always runs to the end of its input. [`EndOfInput`] from the
//! tokenizer unwinds every routine through `?` and is caught once, in
//! [`Parser::run`].

mod decl;
mod matcher;
mod options;
mod tag;
mod types;

pub use options::{KindSet, TagOptions, UnknownKind};
pub use tag::{Tag, TagKind, TagSink};

use rstags_lexer::{CharSource, EndOfInput, KeywordTable, Token, Tokenizer};
use tracing::debug;

/// Result of a parse routine. The only failure is running out of input.
type ParseResult<T = ()> = Result<T, EndOfInput>;

/// State of one parse pass over one input.
pub struct Parser<'a, S, T: ?Sized> {
    tokenizer: Tokenizer<'a, S>,
    sink: &'a mut T,
    options: TagOptions,
    /// Qualifying name for emitted tags. Never changed during a pass.
    scope: Option<&'a str>,
    emitted: usize,
}

impl<'a, S: CharSource, T: TagSink + ?Sized> Parser<'a, S, T> {
    pub fn new(source: S, keywords: &'a KeywordTable, sink: &'a mut T) -> Self {
        Parser {
            tokenizer: Tokenizer::new(source, keywords),
            sink,
            options: TagOptions::default(),
            scope: None,
            emitted: 0,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: TagOptions) -> Self {
        self.options = options;
        self
    }

    /// Qualify tags with `scope`. Only has an effect when qualified output
    /// is enabled in the options.
    #[must_use]
    pub fn with_scope(mut self, scope: Option<&'a str>) -> Self {
        self.scope = scope;
        self
    }

    /// Parse the whole input, emitting tags as declarations are found.
    ///
    /// Returns the number of tags handed to the sink.
    #[tracing::instrument(level = "debug", skip_all, fields(scope = ?self.scope))]
    pub fn run(mut self) -> usize {
        let mut token = Token::new();
        match self.parse_declarations(&mut token) {
            Ok(never) => match never {},
            Err(EndOfInput) => {
                debug!(emitted = self.emitted, "end of input");
            }
        }
        self.emitted
    }

    /// Read the next token into `token`.
    #[inline]
    fn read(&mut self, token: &mut Token) -> ParseResult {
        self.tokenizer.read_token(token)
    }

    /// Build a tag for `name` and hand it to the sink, followed by its
    /// scope-qualified duplicate when one is due.
    fn emit(&mut self, name: &Token, kind: TagKind) {
        if !self.options.kinds.enables(kind) {
            return;
        }

        let tag = Tag {
            name: name.text().into_owned(),
            kind,
            line: name.line,
            offset: name.offset,
        };
        debug!(name = %tag.name, kind = kind.name(), line = tag.line, "tag");

        let qualified = match self.scope {
            Some(scope) if self.options.qualified && !scope.is_empty() => Some(Tag {
                name: format!("{scope}.{}", tag.name),
                kind,
                line: tag.line,
                offset: tag.offset,
            }),
            _ => None,
        };

        self.sink.emit(tag);
        self.emitted += 1;
        if let Some(tag) = qualified {
            self.sink.emit(tag);
            self.emitted += 1;
        }
    }
}

/// Parse one input and emit its tags into `sink`.
///
/// `keywords` is normally [`KeywordTable::rust()`], built once and shared
/// across files. Returns the number of tags emitted.
pub fn parse_file<S, T>(
    source: S,
    keywords: &KeywordTable,
    options: TagOptions,
    scope: Option<&str>,
    sink: &mut T,
) -> usize
where
    S: CharSource,
    T: TagSink + ?Sized,
{
    Parser::new(source, keywords, sink)
        .with_options(options)
        .with_scope(scope)
        .run()
}
