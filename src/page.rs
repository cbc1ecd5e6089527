//! Page orchestration.

use crate::fields;
use bookgen_core::{page_window, BookRecord, GenerateError};
use bookgen_lexicon::WordSupply;

/// Inputs identifying one reproducible slice of the catalog.
#[derive(Debug, Clone)]
pub struct PageParams {
    /// Top-level seed controlling the entire run
    pub user_seed: i64,

    /// 1-based page number; no upper bound
    pub page: u64,

    /// Locale code for templates and vocabulary
    pub locale: String,

    /// Target average like count per book
    pub avg_likes: f64,

    /// Target average review count per book
    pub avg_reviews: f64,
}

/// Generate the single record at an absolute index.
///
/// This is the pure function the whole engine reduces to: the output
/// depends only on the arguments (and the supply's locale and reference
/// date), never on which page request asked for it. No call mutates or
/// reads state shared with sibling records or fields.
pub fn generate_record<W: WordSupply>(
    user_seed: i64,
    index: u64,
    locale: &str,
    avg_likes: f64,
    avg_reviews: f64,
    supply: &W,
) -> Result<BookRecord, GenerateError> {
    Ok(BookRecord {
        index,
        isbn: fields::isbn(user_seed, index, supply),
        title: fields::title(user_seed, index, locale, supply),
        authors: fields::authors(user_seed, index, supply),
        publisher: fields::publisher(user_seed, index, supply),
        likes: fields::likes(user_seed, index, avg_likes)?,
        reviews: fields::reviews(user_seed, index, locale, avg_reviews, supply)?,
    })
}

/// Generate one page of records, ordered by ascending index.
///
/// Length is 20 for page 1 and 10 for every later page. Invalid pages and
/// averages are rejected before any record is generated.
pub fn generate_page<W: WordSupply>(
    params: &PageParams,
    supply: &W,
) -> Result<Vec<BookRecord>, GenerateError> {
    validate_average(params.avg_likes)?;
    validate_average(params.avg_reviews)?;
    let window = page_window(params.page)?;

    tracing::debug!(
        page = params.page,
        start_index = window.start_index,
        count = window.count,
        "generating page window"
    );

    window
        .indexes()
        .map(|index| {
            generate_record(
                params.user_seed,
                index,
                &params.locale,
                params.avg_likes,
                params.avg_reviews,
                supply,
            )
        })
        .collect()
}

fn validate_average(value: f64) -> Result<(), GenerateError> {
    if !value.is_finite() || value < 0.0 {
        return Err(GenerateError::InvalidAverage(value));
    }
    Ok(())
}
