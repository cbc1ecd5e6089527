//! The generated record model.

use serde::{Deserialize, Serialize};

/// One fabricated book.
///
/// For a fixed `(user_seed, locale, avg_likes, avg_reviews)`, the record
/// for a given `index` is a pure function of that index: byte-identical no
/// matter which page request triggered its generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// 1-based absolute position in the conceptually infinite sequence
    pub index: u64,

    /// Hyphenated EAN-13 style identifier
    pub isbn: String,

    /// Locale-templated title
    pub title: String,

    /// 1 to 3 full names
    pub authors: Vec<String>,

    /// Company name
    pub publisher: String,

    /// Non-negative like count
    pub likes: u32,

    /// Nested reviews, possibly empty
    pub reviews: Vec<ReviewRecord>,
}

/// One fabricated review attached to a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Locale-templated review text
    pub text: String,

    /// Full name of the reviewer
    pub reviewer: String,
}
