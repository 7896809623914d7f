//! Configuration options for slug generation.
//!
//! The `Options` struct controls how content is turned into a slug: the
//! delimiter placed between words, an optional prefix, and the stop-word and
//! digit filters.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Delimiter used when none (or an empty one) is configured.
pub const DEFAULT_DELIMITER: &str = "-";

/// Configuration options for `slugify`.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings. Options can also be loaded from JSON, where field
/// names are camelCase and missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use rs_slugify::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     delimiter: "_".to_string(),
///     prefix: "user-content".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Separator inserted between words.
    ///
    /// An empty delimiter is treated as `"-"`.
    ///
    /// Default: `"-"`
    pub delimiter: String,

    /// Text prepended to the slug, followed by one delimiter.
    ///
    /// The prefix is lower-cased but otherwise kept as written.
    ///
    /// Default: `""`
    pub prefix: String,

    /// Drop common English function words ("the", "and", "is", ...).
    ///
    /// Default: `false`
    #[serde(alias = "keyword")]
    pub remove_stop_words: bool,

    /// Strip ASCII digits along with punctuation.
    ///
    /// Default: `false`
    #[serde(alias = "number")]
    pub remove_numbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            prefix: String::new(),
            remove_stop_words: false,
            remove_numbers: false,
        }
    }
}

impl Options {
    /// Options carrying only a delimiter, everything else at its default.
    #[must_use]
    pub fn with_delimiter(delimiter: &str) -> Self {
        Self {
            delimiter: delimiter.to_string(),
            ..Self::default()
        }
    }

    /// The delimiter actually used, with empty values replaced by `"-"`.
    #[must_use]
    pub fn effective_delimiter(&self) -> &str {
        if self.delimiter.is_empty() {
            DEFAULT_DELIMITER
        } else {
            &self.delimiter
        }
    }
}

/// Settings for a single `normalize` pass.
///
/// `remove` selects which characters are stripped from each transliterated
/// character. `None` keeps word characters, whitespace and `$*_+~.()'"!-:@`
/// and strips everything else.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions<'a> {
    /// Separator substituted for runs of hyphens, slashes and whitespace.
    pub delimiter: &'a str,

    /// Pattern whose matches are removed instead of the default allow-list.
    pub remove: Option<&'a Regex>,
}

impl Default for NormalizeOptions<'_> {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            remove: None,
        }
    }
}

impl<'a> NormalizeOptions<'a> {
    /// Normalize with the given delimiter and the default allow-list.
    #[must_use]
    pub fn with_delimiter(delimiter: &'a str) -> Self {
        Self {
            delimiter,
            remove: None,
        }
    }
}
