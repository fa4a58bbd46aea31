//! Keyword table.
//!
//! A plain map from spelling to [`Keyword`]. It is filled once, before any
//! file is parsed, and then shared by reference with every tokenizer;
//! there is no process-wide keyword state.

use rustc_hash::FxHashMap;

use crate::Keyword;

/// Mapping from keyword spelling to [`Keyword`].
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    map: FxHashMap<Box<[u8]>, Keyword>,
}

impl KeywordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding every keyword in [`Keyword::ALL`].
    ///
    /// This is the initialization hook: call it once and pass the table to
    /// each parse.
    pub fn rust() -> Self {
        let mut table = Self::new();
        for (spelling, keyword) in Keyword::ALL {
            table.register(spelling, keyword);
        }
        table
    }

    /// Register `spelling` as `keyword`, replacing any earlier entry.
    pub fn register(&mut self, spelling: &str, keyword: Keyword) {
        self.map.insert(spelling.as_bytes().into(), keyword);
    }

    /// Look up an identifier-shaped spelling.
    #[inline]
    pub fn lookup(&self, spelling: impl AsRef<[u8]>) -> Option<Keyword> {
        self.map.get(spelling.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
