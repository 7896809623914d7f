//! Character transliteration map.
//!
//! A `CharMap` maps single characters to replacement strings. Lookups are
//! total: a character without an entry passes through unchanged. Maps can be
//! extended but never shrink.

use std::collections::HashMap;

use crate::char_table::{CYRILLIC, GREEK, LATIN};

/// Mapping from a character to its ASCII-safe replacement.
///
/// # Example
///
/// ```rust
/// use rs_slugify::CharMap;
///
/// let map = CharMap::new().extended([('♥', "love")]);
/// assert_eq!(map.lookup('é'), Some("e"));
/// assert_eq!(map.lookup('♥'), Some("love"));
/// assert_eq!(map.lookup('x'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMap {
    entries: HashMap<char, String>,
}

impl Default for CharMap {
    fn default() -> Self {
        Self::new()
    }
}

impl CharMap {
    /// Creates a map holding the built-in Latin, Greek and Cyrillic table.
    #[must_use]
    pub fn new() -> Self {
        let entries = LATIN
            .iter()
            .chain(GREEK)
            .chain(CYRILLIC)
            .map(|&(ch, replacement)| (ch, replacement.to_string()))
            .collect();
        Self { entries }
    }

    /// Creates a map with no entries; every character passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the replacement registered for `ch`, if any.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<&str> {
        self.entries.get(&ch).map(String::as_str)
    }

    /// Merges `entries` into the map, overwriting existing keys.
    pub fn register<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let before = self.entries.len();
        let mut count = 0usize;
        for (ch, replacement) in entries {
            self.entries.insert(ch, replacement.into());
            count += 1;
        }
        log::debug!(
            "registered {count} transliteration entries ({} new)",
            self.entries.len() - before
        );
    }

    /// Builder form of `register`.
    #[must_use]
    pub fn extended<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        self.register(entries);
        self
    }

    /// Number of mapped characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no character is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
