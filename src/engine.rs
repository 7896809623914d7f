//! Slug normalization pipeline.
//!
//! `normalize` turns arbitrary text into a delimiter-joined, lower-case
//! identifier:
//!
//! 1. NFC normalization, so precomposed and decomposed accents behave alike
//! 2. Per-character transliteration through a [`CharMap`], followed by
//!    removal of disallowed characters
//! 3. Whitespace trimming
//! 4. Collapsing runs of hyphens, slashes and whitespace into one delimiter
//! 5. Lower-casing
//!
//! `generate_slug` layers punctuation/digit stripping and stop-word
//! filtering on top.

use regex::{NoExpand, Regex};
use unicode_normalization::UnicodeNormalization;

use crate::charmap::CharMap;
use crate::options::{NormalizeOptions, DEFAULT_DELIMITER};
use crate::patterns::{
    is_whitespace, DELIMITER_RUN, DISALLOWED_CHARS, PUNCTUATION, PUNCTUATION_AND_DIGITS,
};
use crate::stop_words;

/// Normalizes `text` into a slug using `map` for transliteration.
///
/// Empty input yields an empty string. The output is trimmed and lower-case,
/// so normalizing it again returns it unchanged.
#[must_use]
pub fn normalize(text: &str, options: &NormalizeOptions<'_>, map: &CharMap) -> String {
    if text.is_empty() {
        return String::new();
    }

    let delimiter = non_empty_delimiter(options.delimiter);
    let remove: &Regex = options.remove.unwrap_or(&DISALLOWED_CHARS);

    let mut transliterated = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.nfc() {
        let replacement = match map.lookup(ch) {
            Some(mapped) => mapped,
            None => &*ch.encode_utf8(&mut buf),
        };
        // A replacement equal to the delimiter would survive as a stray
        // delimiter; a space collapses with its neighbours instead.
        let replacement = if replacement == delimiter { " " } else { replacement };
        transliterated.push_str(&remove.replace_all(replacement, ""));
    }

    let collapsed = DELIMITER_RUN.replace_all(
        transliterated.trim_matches(is_whitespace),
        NoExpand(delimiter),
    );
    let slug = collapsed.to_lowercase();
    log::trace!("normalize({text:?}) -> {slug:?}");
    slug
}

/// Builds a slug from `text`, stripping punctuation and optionally digits
/// and stop words.
///
/// Stop words are removed after normalization by splitting on the delimiter;
/// doubled delimiters present at that point are kept as-is.
#[must_use]
pub fn generate_slug(
    text: &str,
    delimiter: &str,
    remove_stop_words: bool,
    remove_numbers: bool,
    map: &CharMap,
) -> String {
    let delimiter = non_empty_delimiter(delimiter);
    let remove: &Regex = if remove_numbers {
        &PUNCTUATION_AND_DIGITS
    } else {
        &PUNCTUATION
    };

    let options = NormalizeOptions {
        delimiter,
        remove: Some(remove),
    };
    let slug = normalize(text, &options, map);

    if remove_stop_words {
        stop_words::remove_stop_words(&slug, delimiter)
    } else {
        slug
    }
}

fn non_empty_delimiter(delimiter: &str) -> &str {
    if delimiter.is_empty() {
        DEFAULT_DELIMITER
    } else {
        delimiter
    }
}
