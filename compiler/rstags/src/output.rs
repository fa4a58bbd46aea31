//! Tag file rendering.
//!
//! Each tag becomes one line in the classic ctags layout:
//!
//! ```text
//! name<TAB>file<TAB>line;"<TAB>kind
//! ```
//!
//! The address is the line number, and the `;"` keeps older `vi`
//! implementations from reading the kind as part of the address.

use std::fmt;
use std::io::{self, Write};

use rstags_parse::{Tag, TagKind};

/// A [`Tag`] paired with the file it was found in, ready for display.
pub struct TagLine<'a> {
    tag: &'a Tag,
    file: &'a str,
}

impl<'a> TagLine<'a> {
    pub fn new(tag: &'a Tag, file: &'a str) -> Self {
        TagLine { tag, file }
    }
}

impl fmt::Display for TagLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{};\"\t{}",
            self.tag.name,
            self.file,
            self.tag.line,
            self.tag.kind.letter()
        )
    }
}

/// Write one line per tag of `file`, in the order given.
pub fn write_tags(out: &mut impl Write, file: &str, tags: &[Tag]) -> io::Result<()> {
    for tag in tags {
        writeln!(out, "{}", TagLine::new(tag, file))?;
    }
    Ok(())
}

/// Write the kind table shown by `--list-kinds`.
pub fn write_kinds(out: &mut impl Write) -> io::Result<()> {
    for kind in TagKind::ALL {
        writeln!(out, "{}  {}", kind.letter(), kind.description())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
