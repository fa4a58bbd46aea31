//! Tags and the sink they are emitted into.

/// Category of an emitted tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    /// Function or method, from `fn`.
    Function,
    /// Local binding, from `let`.
    Let,
    /// Type alias, from `type`.
    TypeAlias,
}

impl TagKind {
    pub const ALL: [TagKind; 3] = [TagKind::Function, TagKind::Let, TagKind::TypeAlias];

    /// One-letter kind code used in tag files.
    pub const fn letter(self) -> char {
        match self {
            TagKind::Function => 'f',
            TagKind::Let => 'l',
            TagKind::TypeAlias => 't',
        }
    }

    /// Short kind name, the keyword that introduces the declaration.
    pub const fn name(self) -> &'static str {
        match self {
            TagKind::Function => "fn",
            TagKind::Let => "let",
            TagKind::TypeAlias => "type",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            TagKind::Function => "functions",
            TagKind::Let => "let",
            TagKind::TypeAlias => "types",
        }
    }

    pub fn from_letter(letter: char) -> Option<TagKind> {
        Self::ALL.into_iter().find(|kind| kind.letter() == letter)
    }
}

/// One discovered declaration.
///
/// `line` and `offset` locate the first byte of the declared name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    pub line: u32,
    pub offset: u32,
}

/// Receiver of emitted tags.
pub trait TagSink {
    fn emit(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn emit(&mut self, tag: Tag) {
        self.push(tag);
    }
}

#[cfg(test)]
mod tests;
