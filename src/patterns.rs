//! Compiled regex patterns for the slug pipeline.
//!
//! All patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace
// =============================================================================

/// Body of a character class matching ECMAScript whitespace: Unicode space
/// separators, tab/line-feed family, line/paragraph separators and U+FEFF.
/// Unlike Unicode `\s` it excludes U+0085.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Returns true for the characters in `WHITESPACE_CLASS`.
#[must_use]
pub fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// =============================================================================
// Character Removal Patterns
// =============================================================================

/// Matches everything outside the default allow-list: ASCII word characters,
/// whitespace, and `$*_+~.()'"!-:@`.
///
/// Word characters are ASCII only, so letters the transliteration table does
/// not cover are stripped by `normalize` when no custom pattern is given.
pub static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"[^A-Za-z0-9_{WHITESPACE_CLASS}$*+~.()'"!:@-]+"#))
        .expect("DISALLOWED_CHARS regex")
});

/// Punctuation stripped by `generate_slug`.
///
/// Hyphens, `$` and `&` are not in this set; hyphens collapse into the
/// delimiter later in the pipeline.
pub static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[#*|><_`%,;?+~=.()\[\]\\/'^"!:@]"#).expect("PUNCTUATION regex")
});

/// `PUNCTUATION` plus ASCII digits, used when numbers are removed.
pub static PUNCTUATION_AND_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[#*|><_`%,;?+~=.()\[\]\\/'^"!:@0-9]"#).expect("PUNCTUATION_AND_DIGITS regex")
});

// =============================================================================
// Delimiter Patterns
// =============================================================================

/// Runs of hyphens, slashes and whitespace, each replaced by one delimiter.
pub static DELIMITER_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[-/{WHITESPACE_CLASS}]+")).expect("DELIMITER_RUN regex")
});
