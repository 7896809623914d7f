//! English stop words removed by `Options::remove_stop_words`.
//!
//! Words are compared after normalization, so entries are lower-case. The
//! contraction entries ("it's", "you're", ...) never match slugs produced by
//! `generate_slug`, whose punctuation filter always strips the apostrophe;
//! they only apply when `remove_stop_words` is called directly.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words: articles, prepositions, pronouns and
/// contractions.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "it", "it's", "its", "itself", "let's", "me", "more",
    "most", "my", "myself", "nor", "of", "on", "once", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "she", "she'd", "she'll", "she's",
    "should", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "we", "we'd", "we'll", "we're", "we've", "were", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "would", "you",
    "you'd", "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Returns true if `word` exactly matches a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Removes stop words from a delimiter-joined slug.
///
/// Only whole words are dropped. Empty segments are not stop words, so any
/// doubled delimiter already in `slug` survives and is not collapsed again.
#[must_use]
pub fn remove_stop_words(slug: &str, delimiter: &str) -> String {
    slug.split(delimiter)
        .filter(|word| !is_stop_word(word))
        .collect::<Vec<_>>()
        .join(delimiter)
}
