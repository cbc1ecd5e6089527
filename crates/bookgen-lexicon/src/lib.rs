//! Locale-aware word supply for the bookgen catalog generator.
//!
//! The generation engine treats its vocabulary as a capability: every draw
//! takes an explicit random source, so the caller controls seeding and no
//! shared mutable RNG state exists anywhere. This crate defines that
//! capability as the [`WordSupply`] trait and ships [`BuiltinLexicon`], an
//! implementation backed by static word tables for `en`, `es`, and `fr`
//! with a silent fallback to `en` for any other locale code.
//!
//! # Example
//!
//! ```rust
//! use bookgen_lexicon::{BuiltinLexicon, WordSupply};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let lexicon = BuiltinLexicon::new("en");
//! let mut rng = StdRng::seed_from_u64(42);
//! let name = lexicon.full_name(&mut rng);
//! assert!(name.contains(' '));
//! ```

pub mod builtin;
mod words;

use chrono::NaiveDate;
use rand::Rng;

// Re-exports for convenience
pub use builtin::BuiltinLexicon;

/// Locale-aware vocabulary capability.
///
/// Every method draws from the caller-supplied random source and nothing
/// else, so results are fully determined by the RNG's seed and the
/// implementation's locale.
pub trait WordSupply {
    /// One full person name (given + family).
    fn full_name<R: Rng>(&self, rng: &mut R) -> String;

    /// One company name.
    fn company_name<R: Rng>(&self, rng: &mut R) -> String;

    /// One product adjective ("Rustic", "Sleek", ...).
    fn product_adjective<R: Rng>(&self, rng: &mut R) -> String;

    /// One product noun ("Chair", "Gloves", ...).
    fn product<R: Rng>(&self, rng: &mut R) -> String;

    /// One product material ("Granite", "Steel", ...).
    fn product_material<R: Rng>(&self, rng: &mut R) -> String;

    /// One country name.
    fn country<R: Rng>(&self, rng: &mut R) -> String;

    /// One city name.
    fn city<R: Rng>(&self, rng: &mut R) -> String;

    /// One category/genre name.
    fn category<R: Rng>(&self, rng: &mut R) -> String;

    /// 13 digits with a valid EAN-13 check digit, undivided.
    fn ean13_digits<R: Rng>(&self, rng: &mut R) -> String;

    /// A date at most `max_days_back` days before the reference date.
    fn recent_date<R: Rng>(&self, rng: &mut R, max_days_back: u32) -> NaiveDate;

    /// Format a date as the locale's month-name + year convention.
    fn month_year(&self, date: NaiveDate) -> String;
}
