//! Fixed-point rounding shared by every normalizer.
//!
//! Scores carry [`SCALE`] digits after the decimal point and ties round away
//! from zero (round-half-up). Values are handled internally as integer
//! "micros" (value × 10^6) so that ratios of integers and the cosine remap
//! round exactly, without a detour through an inexact `f64` product.

/// Digits kept after the decimal point.
pub const SCALE: u32 = 6;

/// `1.0` expressed in micros.
pub const UNIT_MICROS: i64 = 1_000_000;

/// Round a real value to [`SCALE`] decimals, half away from zero.
///
/// Non-finite values are returned unchanged.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    from_micros(to_micros(value))
}

/// Scale a real value to micros, rounding half away from zero.
#[inline]
#[must_use]
pub fn to_micros(value: f64) -> i64 {
    (value * UNIT_MICROS as f64).round() as i64
}

/// Convert micros back to the nearest `f64`.
#[inline]
#[must_use]
pub fn from_micros(micros: i64) -> f64 {
    micros as f64 / UNIT_MICROS as f64
}

/// `numerator / denominator` in micros, rounded half-up using integer
/// arithmetic only. Returns `None` for a zero denominator.
#[inline]
#[must_use]
pub fn ratio_micros(numerator: u64, denominator: u64) -> Option<i64> {
    if denominator == 0 {
        return None;
    }
    let num = numerator as u128 * UNIT_MICROS as u128 * 2 + denominator as u128;
    let micros = num / (denominator as u128 * 2);
    i64::try_from(micros).ok()
}

/// `numerator / denominator` rounded to [`SCALE`] decimals.
#[inline]
#[must_use]
pub fn round_ratio(numerator: u64, denominator: u64) -> Option<f64> {
    ratio_micros(numerator, denominator).map(from_micros)
}

/// Linear remap of a micros value from `[-1, 1]` to `[0, 1]`:
/// `0.5 * x + 0.5`, rounded half-up.
#[inline]
#[must_use]
pub fn remap_unit_micros(micros: i64) -> i64 {
    let shifted = micros + UNIT_MICROS;
    if shifted >= 0 {
        (shifted + 1) / 2
    } else {
        (shifted - 1) / 2
    }
}
