//! Built-in lexicon backed by static word tables.

use crate::words::{table_for, WordTable};
use crate::WordSupply;
use chrono::{Duration, Locale, NaiveDate, Utc};
use rand::Rng;

/// Word supply backed by the static `en`/`es`/`fr` tables.
///
/// Unknown locale codes fall back to `en` for both words and date
/// formatting; the fallback is silent and total.
pub struct BuiltinLexicon {
    table: &'static WordTable,
    date_locale: Locale,
    reference_date: NaiveDate,
}

impl BuiltinLexicon {
    /// Create a lexicon for the given locale code.
    ///
    /// The reference date for [`WordSupply::recent_date`] defaults to
    /// today (UTC).
    pub fn new(locale: &str) -> Self {
        Self {
            table: table_for(locale),
            date_locale: date_locale_for(locale),
            reference_date: Utc::now().date_naive(),
        }
    }

    /// Pin the reference date for recent-date draws.
    ///
    /// Generation stays deterministic within a day either way; pinning
    /// makes it deterministic across days, which tests rely on.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }
}

fn date_locale_for(locale: &str) -> Locale {
    match locale {
        "es" => Locale::es_ES,
        "fr" => Locale::fr_FR,
        _ => Locale::en_US,
    }
}

fn pick<'a, R: Rng>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list[rng.gen_range(0..list.len())]
}

/// Compute the EAN-13 check digit for 12 leading digits.
fn ean13_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - (sum % 10)) % 10) as u8
}

impl WordSupply for BuiltinLexicon {
    fn full_name<R: Rng>(&self, rng: &mut R) -> String {
        let first = pick(rng, self.table.first_names);
        let last = pick(rng, self.table.last_names);
        format!("{first} {last}")
    }

    fn company_name<R: Rng>(&self, rng: &mut R) -> String {
        let name = pick(rng, self.table.last_names);
        let suffix = pick(rng, self.table.company_suffixes);
        format!("{name} {suffix}")
    }

    fn product_adjective<R: Rng>(&self, rng: &mut R) -> String {
        pick(rng, self.table.adjectives).to_string()
    }

    fn product<R: Rng>(&self, rng: &mut R) -> String {
        pick(rng, self.table.products).to_string()
    }

    fn product_material<R: Rng>(&self, rng: &mut R) -> String {
        pick(rng, self.table.materials).to_string()
    }

    fn country<R: Rng>(&self, rng: &mut R) -> String {
        pick(rng, self.table.countries).to_string()
    }

    fn city<R: Rng>(&self, rng: &mut R) -> String {
        pick(rng, self.table.cities).to_string()
    }

    fn category<R: Rng>(&self, rng: &mut R) -> String {
        pick(rng, self.table.categories).to_string()
    }

    fn ean13_digits<R: Rng>(&self, rng: &mut R) -> String {
        let mut digits = [0u8; 13];
        for d in digits.iter_mut().take(12) {
            *d = rng.gen_range(0..10);
        }
        digits[12] = ean13_check_digit(&digits[..12]);
        digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    fn recent_date<R: Rng>(&self, rng: &mut R, max_days_back: u32) -> NaiveDate {
        let days_back = rng.gen_range(0..=i64::from(max_days_back));
        self.reference_date - Duration::days(days_back)
    }

    fn month_year(&self, date: NaiveDate) -> String {
        date.format_localized("%B %Y", self.date_locale).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_deterministic_draws() {
        let lexicon = BuiltinLexicon::new("en");

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(lexicon.full_name(&mut rng1), lexicon.full_name(&mut rng2));
        assert_eq!(
            lexicon.company_name(&mut rng1),
            lexicon.company_name(&mut rng2)
        );
        assert_eq!(
            lexicon.ean13_digits(&mut rng1),
            lexicon.ean13_digits(&mut rng2)
        );
    }

    #[test]
    fn test_unknown_locale_falls_back_to_en() {
        let en = BuiltinLexicon::new("en");
        let other = BuiltinLexicon::new("zz-ZZ");

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(en.full_name(&mut rng1), other.full_name(&mut rng2));
        assert_eq!(
            en.month_year(fixed_date()),
            other.month_year(fixed_date())
        );
    }

    #[test]
    fn test_ean13_digits_shape_and_checksum() {
        let lexicon = BuiltinLexicon::new("en");
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let ean = lexicon.ean13_digits(&mut rng);
            assert_eq!(ean.len(), 13);
            let digits: Vec<u8> = ean
                .bytes()
                .map(|b| {
                    assert!(b.is_ascii_digit());
                    b - b'0'
                })
                .collect();
            assert_eq!(digits[12], ean13_check_digit(&digits[..12]));
        }
    }

    #[test]
    fn test_recent_date_within_window() {
        let lexicon = BuiltinLexicon::new("en").with_reference_date(fixed_date());
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let date = lexicon.recent_date(&mut rng, 60);
            assert!(date <= fixed_date());
            assert!(date >= fixed_date() - Duration::days(60));
        }
    }

    #[test]
    fn test_month_year_localization() {
        let date = fixed_date();
        assert_eq!(BuiltinLexicon::new("en").month_year(date), "January 2024");
        assert_eq!(BuiltinLexicon::new("es").month_year(date), "enero 2024");
        assert_eq!(BuiltinLexicon::new("fr").month_year(date), "janvier 2024");
    }

    #[test]
    fn test_locale_tables_differ() {
        let mut rng1 = StdRng::seed_from_u64(3);
        let mut rng2 = StdRng::seed_from_u64(3);

        let en = BuiltinLexicon::new("en").product(&mut rng1);
        let es = BuiltinLexicon::new("es").product(&mut rng2);
        assert_ne!(en, es);
    }
}
