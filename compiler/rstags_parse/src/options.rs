//! Tag output options.
//!
//! Which kinds are emitted, and whether scope-qualified duplicates are
//! added. Kind sets use the one-letter codes from [`TagKind::letter`].

use bitflags::bitflags;

use crate::TagKind;

bitflags! {
    /// Set of enabled tag kinds.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct KindSet: u8 {
        const FUNCTION = 1 << 0;
        const LET = 1 << 1;
        const TYPE_ALIAS = 1 << 2;
    }
}

/// A kind string contained a letter that names no tag kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag kind `{0}` (expected one of f, l, t)")]
pub struct UnknownKind(pub char);

impl KindSet {
    /// The flag for a single kind.
    pub const fn of(kind: TagKind) -> KindSet {
        match kind {
            TagKind::Function => KindSet::FUNCTION,
            TagKind::Let => KindSet::LET,
            TagKind::TypeAlias => KindSet::TYPE_ALIAS,
        }
    }

    #[inline]
    pub fn enables(self, kind: TagKind) -> bool {
        self.contains(KindSet::of(kind))
    }

    /// Parse a kind string.
    ///
    /// `"fl"` enables exactly the listed kinds. A string starting with `+`
    /// or `-` edits the full set instead: `"-l"` is everything but local
    /// bindings, `"-lt+t"` is functions and types.
    pub fn from_letters(letters: &str) -> Result<KindSet, UnknownKind> {
        let editing = letters.starts_with(['+', '-']);
        let mut set = if editing {
            KindSet::all()
        } else {
            KindSet::empty()
        };
        let mut adding = true;
        for letter in letters.chars() {
            match letter {
                '+' => adding = true,
                '-' => adding = false,
                _ => {
                    let kind = TagKind::from_letter(letter).ok_or(UnknownKind(letter))?;
                    set.set(KindSet::of(kind), adding);
                }
            }
        }
        Ok(set)
    }
}

/// Options controlling tag emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagOptions {
    /// Kinds to emit. Disabled kinds are parsed but never reach the sink.
    pub kinds: KindSet,
    /// Emit a `scope.name` duplicate for every tag while a scope is set.
    pub qualified: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        TagOptions {
            kinds: KindSet::all(),
            qualified: false,
        }
    }
}

#[cfg(test)]
mod tests;
