//! Error types for rs-slugify.
//!
//! Slug generation itself never fails. These errors only come from the
//! fallible edges around it: parsing serialized content trees and compiling
//! caller-supplied removal patterns.

/// Error type for slugify operations that take untrusted input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied removal pattern is not a valid regular expression.
    #[error("Invalid removal pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A serialized content tree could not be parsed as JSON.
    #[error("Invalid content JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type alias for slugify operations.
pub type Result<T> = std::result::Result<T, Error>;
