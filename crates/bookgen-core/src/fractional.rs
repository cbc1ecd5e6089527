//! Fractional-average to integer-count conversion.

use crate::error::GenerateError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Convert a real-valued target average into a deterministic integer draw
/// whose expectation over many distinct seeds equals the average.
///
/// With `base = floor(average)` and `frac = average - base`, one uniform
/// value in `[0, 1)` is drawn from an RNG seeded by `seed`; the result is
/// `base + 1` when the draw lands below `frac`, otherwise `base`.
///
/// Negative or non-finite averages are rejected, never clamped.
pub fn fractional_count(average: f64, seed: u64) -> Result<u32, GenerateError> {
    if !average.is_finite() || average < 0.0 {
        return Err(GenerateError::InvalidAverage(average));
    }

    let base = average.floor();
    let frac = average - base;

    let mut rng = StdRng::seed_from_u64(seed);
    let u: f64 = rng.gen();

    if u < frac {
        Ok(base as u32 + 1)
    } else {
        Ok(base as u32)
    }
}
