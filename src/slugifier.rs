//! Slug generation context.
//!
//! A `Slugifier` owns the transliteration map used by every operation, so
//! custom mappings are set up explicitly instead of through shared global
//! state. It is `Send + Sync` and can be shared across threads once built.

use regex::Regex;

use crate::charmap::CharMap;
use crate::engine;
use crate::error::Result;
use crate::extract::slugify_node;
use crate::node::ContentNode;
use crate::options::{NormalizeOptions, Options};

/// Slug generator bound to a transliteration map.
///
/// # Example
///
/// ```rust
/// use rs_slugify::{CharMap, Options, Slugifier};
///
/// let slugifier = Slugifier::with_char_map(CharMap::new().extended([('♥', "love")]));
/// let slug = slugifier.slugify(&"I ♥ Rust".into(), &Options::default());
/// assert_eq!(slug, "i-love-rust");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Slugifier {
    char_map: CharMap,
}

impl Slugifier {
    /// Creates a slugifier with the built-in transliteration table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slugifier using `char_map`.
    #[must_use]
    pub fn with_char_map(char_map: CharMap) -> Self {
        Self { char_map }
    }

    /// The transliteration map in use.
    #[must_use]
    pub fn char_map(&self) -> &CharMap {
        &self.char_map
    }

    /// Registers extra transliteration entries, overriding existing ones.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        self.char_map.register(entries);
    }

    /// Reduces a content tree to a slug.
    #[must_use]
    pub fn slugify(&self, node: &ContentNode, options: &Options) -> String {
        let slug = slugify_node(node, options, &self.char_map);
        log::trace!("slugify -> {slug:?}");
        slug
    }

    /// Runs the normalization pipeline on `text`.
    #[must_use]
    pub fn normalize(&self, text: &str, options: &NormalizeOptions<'_>) -> String {
        engine::normalize(text, options, &self.char_map)
    }

    /// Runs the normalization pipeline, removing whatever `pattern` matches
    /// instead of applying the default allow-list.
    pub fn normalize_with_pattern(
        &self,
        text: &str,
        delimiter: &str,
        pattern: &str,
    ) -> Result<String> {
        let remove = Regex::new(pattern)?;
        let options = NormalizeOptions {
            delimiter,
            remove: Some(&remove),
        };
        Ok(self.normalize(text, &options))
    }

    /// Builds a slug from text with punctuation, digit and stop-word
    /// filtering.
    #[must_use]
    pub fn generate_slug(
        &self,
        text: &str,
        delimiter: &str,
        remove_stop_words: bool,
        remove_numbers: bool,
    ) -> String {
        engine::generate_slug(
            text,
            delimiter,
            remove_stop_words,
            remove_numbers,
            &self.char_map,
        )
    }
}
