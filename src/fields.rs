//! Per-field record generators.
//!
//! Each field derives its own sub-seed from `(user_seed, record_index,
//! tag)` and constructs a local RNG from it, so re-rolling one field of one
//! record never perturbs any other field or record. The tags are fixed
//! literals; changing one invalidates every previously generated catalog.

use crate::template;
use bookgen_core::{field_seed, fractional_count, nested_seed, GenerateError, ReviewRecord};
use bookgen_lexicon::WordSupply;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TAG_ISBN: &str = "isbn";
const TAG_TITLE: &str = "title";
const TAG_AUTHORS: &str = "authors";
const TAG_PUBLISHER: &str = "publisher";
const TAG_LIKES: &str = "likes";
const TAG_REVIEW_COUNT: &str = "review-count";
const TAG_REVIEWS: &str = "reviews";

/// How far back a review's date may lie, in days.
const REVIEW_LOOKBACK_DAYS: u32 = 60;

fn field_rng(user_seed: i64, index: u64, tag: &str) -> StdRng {
    StdRng::seed_from_u64(field_seed(user_seed, index, tag))
}

/// Hyphenated EAN-13 style identifier: a literal `978` prefix, then fixed
/// 1-3-5-1 slices of the raw 13 digits.
pub fn isbn<W: WordSupply>(user_seed: i64, index: u64, supply: &W) -> String {
    let mut rng = field_rng(user_seed, index, TAG_ISBN);
    let ean = supply.ean13_digits(&mut rng);
    format!(
        "978-{}-{}-{}-{}",
        &ean[3..4],
        &ean[4..7],
        &ean[7..12],
        &ean[12..13]
    )
}

/// Locale-templated title. Slot words are drawn before the template is
/// picked; both draws come from the title sub-seed.
pub fn title<W: WordSupply>(user_seed: i64, index: u64, locale: &str, supply: &W) -> String {
    let mut rng = field_rng(user_seed, index, TAG_TITLE);
    let adjective = supply.product_adjective(&mut rng);
    let country = supply.country(&mut rng);
    let city = supply.city(&mut rng);
    let material = supply.product_material(&mut rng);
    template::render(
        &mut rng,
        template::title_templates(locale),
        &[&adjective, &country, &city, &material],
    )
}

/// 1 to 3 author names. Each author gets a nested sub-seed keyed by its
/// position, so a different author count leaves the other names unchanged.
pub fn authors<W: WordSupply>(user_seed: i64, index: u64, supply: &W) -> Vec<String> {
    let seed = field_seed(user_seed, index, TAG_AUTHORS);
    let mut rng = StdRng::seed_from_u64(seed);
    let count: u64 = rng.gen_range(1..=3);

    (0..count)
        .map(|i| {
            let mut author_rng = StdRng::seed_from_u64(nested_seed(seed, i));
            supply.full_name(&mut author_rng)
        })
        .collect()
}

/// One company name.
pub fn publisher<W: WordSupply>(user_seed: i64, index: u64, supply: &W) -> String {
    let mut rng = field_rng(user_seed, index, TAG_PUBLISHER);
    supply.company_name(&mut rng)
}

/// Like count via the fractional-average draw.
pub fn likes(user_seed: i64, index: u64, avg_likes: f64) -> Result<u32, GenerateError> {
    fractional_count(avg_likes, field_seed(user_seed, index, TAG_LIKES))
}

/// Nested reviews. The count comes from its own sub-seed; each review then
/// derives a further sub-seed that covers both its text and its reviewer,
/// so review `i` is identical whatever the count around it.
pub fn reviews<W: WordSupply>(
    user_seed: i64,
    index: u64,
    locale: &str,
    avg_reviews: f64,
    supply: &W,
) -> Result<Vec<ReviewRecord>, GenerateError> {
    let count = fractional_count(avg_reviews, field_seed(user_seed, index, TAG_REVIEW_COUNT))?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let reviews_seed = field_seed(user_seed, index, TAG_REVIEWS);
    let records = (0..u64::from(count))
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(nested_seed(reviews_seed, i));
            let text = review_text(&mut rng, locale, supply);
            let reviewer = supply.full_name(&mut rng);
            ReviewRecord { text, reviewer }
        })
        .collect();

    Ok(records)
}

fn review_text<R: Rng, W: WordSupply>(rng: &mut R, locale: &str, supply: &W) -> String {
    let sentiment = supply.product_adjective(rng);
    let item = supply.product(rng);
    let author = supply.full_name(rng);
    let read_at = supply.month_year(supply.recent_date(rng, REVIEW_LOOKBACK_DAYS));
    let genre = supply.category(rng);
    template::render(
        rng,
        template::review_templates(locale),
        &[&sentiment, &item, &author, &read_at, &genre],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookgen_lexicon::BuiltinLexicon;
    use chrono::NaiveDate;

    fn supply(locale: &str) -> BuiltinLexicon {
        BuiltinLexicon::new(locale)
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_isbn_shape() {
        let supply = supply("en");
        for index in 1..=50 {
            let isbn = isbn(42, index, &supply);
            let groups: Vec<&str> = isbn.split('-').collect();
            assert_eq!(groups[0], "978");
            assert_eq!(groups[1].len(), 1);
            assert_eq!(groups[2].len(), 3);
            assert_eq!(groups[3].len(), 5);
            assert_eq!(groups[4].len(), 1);
            assert!(groups[1..].iter().all(|g| g.bytes().all(|b| b.is_ascii_digit())));
        }
    }

    #[test]
    fn test_fields_are_stable() {
        let supply = supply("en");
        assert_eq!(isbn(42, 7, &supply), isbn(42, 7, &supply));
        assert_eq!(title(42, 7, "en", &supply), title(42, 7, "en", &supply));
        assert_eq!(authors(42, 7, &supply), authors(42, 7, &supply));
        assert_eq!(publisher(42, 7, &supply), publisher(42, 7, &supply));
    }

    #[test]
    fn test_fields_are_decorrelated_across_indices() {
        let supply = supply("en");
        let titles: Vec<String> = (1..=20).map(|i| title(42, i, "en", &supply)).collect();
        let distinct: std::collections::HashSet<&String> = titles.iter().collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_author_count_bound() {
        let supply = supply("en");
        for index in 1..=200 {
            let len = authors(42, index, &supply).len();
            assert!((1..=3).contains(&len), "got {len} authors at {index}");
        }
    }

    #[test]
    fn test_likes_whole_average() {
        for index in 1..=100 {
            assert_eq!(likes(42, index, 4.0).unwrap(), 4);
        }
    }

    #[test]
    fn test_zero_average_means_no_reviews() {
        let supply = supply("en");
        for index in 1..=50 {
            assert!(reviews(42, index, "en", 0.0, &supply).unwrap().is_empty());
        }
    }

    #[test]
    fn test_negative_average_rejected() {
        let supply = supply("en");
        assert!(likes(42, 1, -1.0).is_err());
        assert!(reviews(42, 1, "en", -0.5, &supply).is_err());
    }

    #[test]
    fn test_review_slots_filled() {
        let supply = supply("en");
        for index in 1..=50 {
            for review in reviews(42, index, "en", 3.0, &supply).unwrap() {
                assert!(!review.text.contains('{'), "unfilled slot: {}", review.text);
                assert!(review.reviewer.contains(' '));
            }
        }
    }
}
