//! # rs-slugify
//!
//! Turns labels into slugs: normalized, lower-case, delimiter-joined
//! identifiers for URL fragments, anchor IDs and keys.
//!
//! Input can be plain text, a number, or a tree of nested content nodes such
//! as the children of a rendered heading.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_slugify::{slugify, slugify_with_options, ContentNode, Options};
//!
//! assert_eq!(slugify("crème brulée"), "creme-brulee");
//!
//! let heading = ContentNode::element(
//!     "h2",
//!     vec![ContentNode::element("span", "Getting"), ContentNode::from("Started")],
//! );
//! let options = Options {
//!     prefix: "user-content".to_string(),
//!     ..Options::default()
//! };
//! assert_eq!(slugify_with_options(heading, &options), "user-content-getting-started");
//! ```
//!
//! ## Features
//!
//! - **Transliteration**: Latin diacritics, ligatures, Greek and Cyrillic map to
//!   ASCII; the map can be extended through [`Slugifier`]
//! - **Content trees**: text, numbers, sequences, wrappers and elements
//! - **Options**: custom delimiters, prefixes, stop-word and digit removal
//! - **Total**: every input yields a string, never an error

mod char_table;
mod error;
mod extract;
mod options;
mod patterns;

/// Character transliteration map.
pub mod charmap;

/// Normalization pipeline (`normalize`, `generate_slug`).
pub mod engine;

/// Content node tree and its JSON adapter.
pub mod node;

/// Slug generation context owning a transliteration map.
pub mod slugifier;

/// English stop-word list.
pub mod stop_words;

use std::sync::LazyLock;

// Public API - re-exports
pub use charmap::CharMap;
pub use error::{Error, Result};
pub use node::ContentNode;
pub use options::{NormalizeOptions, Options, DEFAULT_DELIMITER};
pub use slugifier::Slugifier;

static DEFAULT_SLUGIFIER: LazyLock<Slugifier> = LazyLock::new(Slugifier::new);

/// Slugifies content using default options.
///
/// # Example
///
/// ```rust
/// use rs_slugify::slugify;
///
/// assert_eq!(slugify("this is a test"), "this-is-a-test");
/// assert_eq!(slugify(9876), "9876");
/// assert_eq!(slugify(vec!["here", "are", "multiple spans"]), "here-are-multiple-spans");
/// ```
#[must_use]
pub fn slugify(node: impl Into<ContentNode>) -> String {
    slugify_with_options(node, &Options::default())
}

/// Slugifies content with custom options.
///
/// # Example
///
/// ```rust
/// use rs_slugify::{slugify_with_options, Options};
///
/// let options = Options {
///     prefix: "tada".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(slugify_with_options(9876, &options), "tada-9876");
/// ```
#[must_use]
pub fn slugify_with_options(node: impl Into<ContentNode>, options: &Options) -> String {
    DEFAULT_SLUGIFIER.slugify(&node.into(), options)
}

/// Runs the normalization pipeline with the built-in transliteration map.
///
/// # Example
///
/// ```rust
/// use rs_slugify::{normalize, NormalizeOptions};
///
/// assert_eq!(normalize("Hello - World", &NormalizeOptions::default()), "hello-world");
/// ```
#[must_use]
pub fn normalize(text: &str, options: &NormalizeOptions<'_>) -> String {
    DEFAULT_SLUGIFIER.normalize(text, options)
}

/// Builds a slug from text with the built-in transliteration map.
///
/// # Example
///
/// ```rust
/// use rs_slugify::generate_slug;
///
/// assert_eq!(generate_slug("The Top 10 Tips", "_", true, true), "top_tips");
/// ```
#[must_use]
pub fn generate_slug(
    text: &str,
    delimiter: &str,
    remove_stop_words: bool,
    remove_numbers: bool,
) -> String {
    DEFAULT_SLUGIFIER.generate_slug(text, delimiter, remove_stop_words, remove_numbers)
}
