//! Token and keyword definitions.

use std::borrow::Cow;

/// Kind of a lexical unit.
///
/// `Character` and `DoubleColon` are part of the token model but are never
/// produced: `'` opens a string literal and `:` is scanned as an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// No token has been read yet.
    None,
    Character,
    ForwardSlash,
    Keyword,
    Identifier,
    String,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenSquare,
    CloseSquare,
    /// Statement terminator, synthesized from a newline.
    Terminator,
    DoubleColon,
    Star,
    /// The generic sigil `~`.
    Sigil,
    Ampersand,
    /// `<-`
    LeftArrow,
    Dot,
    Comma,
}

impl TokenKind {
    /// Returns `true` if a newline directly after a token of this kind
    /// terminates the statement.
    #[inline]
    pub const fn ends_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::String
                | TokenKind::CloseParen
                | TokenKind::CloseCurly
                | TokenKind::CloseSquare
        )
    }

    /// The closing kind matching an opening bracket, `None` for every
    /// other kind.
    #[inline]
    pub const fn closing(self) -> Option<TokenKind> {
        match self {
            TokenKind::OpenParen => Some(TokenKind::CloseParen),
            TokenKind::OpenCurly => Some(TokenKind::CloseCurly),
            TokenKind::OpenSquare => Some(TokenKind::CloseSquare),
            _ => None,
        }
    }
}

/// Keywords the tokenizer distinguishes from plain identifiers.
///
/// Only `fn`, `type` and `let` introduce tags; `struct`, `trait`, `enum`
/// and `fn` also matter inside type expressions. The rest are recognized
/// so they never masquerade as names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Use,
    Mut,
    Type,
    Let,
    Fn,
    Struct,
    Impl,
    Trait,
    Enum,
    Mod,
    Static,
    MacroRules,
}

impl Keyword {
    /// Every keyword with its spelling, in registration order.
    pub const ALL: [(&'static str, Keyword); 12] = [
        ("use", Keyword::Use),
        ("mut", Keyword::Mut),
        ("type", Keyword::Type),
        ("let", Keyword::Let),
        ("fn", Keyword::Fn),
        ("enum", Keyword::Enum),
        ("struct", Keyword::Struct),
        ("trait", Keyword::Trait),
        ("impl", Keyword::Impl),
        ("mod", Keyword::Mod),
        ("static", Keyword::Static),
        // `!` is not an identifier byte, so this spelling never matches.
        ("macro_rules!", Keyword::MacroRules),
    ];

    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Use => "use",
            Keyword::Mut => "mut",
            Keyword::Type => "type",
            Keyword::Let => "let",
            Keyword::Fn => "fn",
            Keyword::Struct => "struct",
            Keyword::Impl => "impl",
            Keyword::Trait => "trait",
            Keyword::Enum => "enum",
            Keyword::Mod => "mod",
            Keyword::Static => "static",
            Keyword::MacroRules => "macro_rules!",
        }
    }
}

/// A lexical unit.
///
/// Tokens are reused: the tokenizer overwrites one in place on every read.
/// `line` and `offset` locate the first byte of the token's content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Set only when `kind` is [`TokenKind::Keyword`].
    pub keyword: Option<Keyword>,
    /// Raw spelling for identifiers and keywords, literal contents for
    /// strings, empty otherwise. Bytes are kept undecoded.
    pub text: Vec<u8>,
    pub line: u32,
    pub offset: u32,
}

impl Token {
    /// Create an empty token that has not been read into yet.
    pub fn new() -> Self {
        Token {
            kind: TokenKind::None,
            keyword: None,
            text: Vec::new(),
            line: 0,
            offset: 0,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword && self.keyword == Some(keyword)
    }

    /// Token text as a string, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    /// Clear kind, keyword and text before a new read. The text buffer
    /// keeps its allocation.
    pub(crate) fn reset(&mut self) {
        self.kind = TokenKind::None;
        self.keyword = None;
        self.text.clear();
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}
