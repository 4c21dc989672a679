//! Similarity normalizers
//!
//! Each function wraps a primitive from [`crate::distance`] and turns it into
//! a bounded score rounded to six decimals (see [`crate::rounding`]).
//!
//! | Function | Formula | Range |
//! |---|---|---|
//! | [`hamming_similarity`] | `1 - dist / len(a)` | `[0, 1]` |
//! | [`cosine_similarity`] | `0.5 * cos + 0.5` | `[0, 1]` |
//! | [`histogram_cosine_similarity`] | `cos` over sparse counts | `[0, 1]` |
//! | [`euclidean_similarity`] | `1 / dist` | `[0, inf)` |
//! | [`smoothed_euclidean_similarity`] | `1 / (1 + dist)` | `(0, 1]` |
//! | [`levenshtein_similarity`] | `dist / max(len a, len b)` | `[0, 1]` |
//!
//! Note that [`levenshtein_similarity`] is a normalized *distance*: higher
//! means less alike, unlike every other metric here. The formula is kept
//! as-is so scores stay comparable with values already stored by callers.

use crate::distance::{
    cosine_raw, euclidean_distance, hamming_distance, histogram_cosine_raw, levenshtein_distance,
};
use crate::error::{Error, Result};
use crate::histogram::SparseHistogram;
use crate::rounding::{
    from_micros, ratio_micros, remap_unit_micros, round_half_up, to_micros, UNIT_MICROS,
};
use tracing::debug;

/// `1 - hamming_distance(a, b) / len(a)`.
///
/// `a` supplies the divisor, so it must not be empty.
pub fn hamming_similarity(a: &str, b: &str) -> Result<f64> {
    let distance = hamming_distance(a, b)?;
    let size = a.chars().count();
    let micros = ratio_micros(distance as u64, size as u64).ok_or(Error::EmptyInput)?;
    Ok(from_micros(UNIT_MICROS - micros))
}

/// Cosine of the character-ordinal vectors remapped from `[-1, 1]` to `[0, 1]`.
///
/// The raw cosine is rounded before the remap and the result is rounded
/// again, both half-up.
pub fn cosine_similarity(a: &str, b: &str) -> Result<f64> {
    let raw = to_micros(cosine_raw(a, b)?);
    Ok(from_micros(remap_unit_micros(raw)))
}

/// Cosine between two JSON histogram payloads.
///
/// Never fails: blank or missing input, unparseable text and zero-norm
/// histograms all score `0.0`.
pub fn histogram_cosine_similarity(json1: Option<&str>, json2: Option<&str>) -> f64 {
    let (Some(json1), Some(json2)) = (json1, json2) else {
        return 0.0;
    };
    if json1.trim().is_empty() || json2.trim().is_empty() {
        return 0.0;
    }

    let parsed =
        SparseHistogram::parse(json1).and_then(|h1| Ok((h1, SparseHistogram::parse(json2)?)));
    match parsed {
        Ok((h1, h2)) => histogram_cosine_raw(&h1, &h2).map_or(0.0, round_half_up),
        Err(e) => {
            debug!("Histogram similarity falls back to 0: {}", e);
            0.0
        }
    }
}

/// `1 / euclidean_distance(a, b)`, with no smoothing term.
///
/// Identical inputs have distance 0 and yield [`Error::ZeroDistance`]
/// instead of a maximal score. Use [`smoothed_euclidean_similarity`] for a
/// bounded variant.
pub fn euclidean_similarity(a: &str, b: &str) -> Result<f64> {
    let distance = euclidean_distance(a, b)?;
    if distance == 0.0 {
        return Err(Error::ZeroDistance);
    }
    Ok(round_half_up(1.0 / distance))
}

/// `1 / (1 + euclidean_distance(a, b))`, in `(0, 1]`.
pub fn smoothed_euclidean_similarity(a: &str, b: &str) -> Result<f64> {
    let distance = euclidean_distance(a, b)?;
    Ok(round_half_up(1.0 / (1.0 + distance)))
}

/// `levenshtein_distance(a, b) / max(len(a), len(b))`.
///
/// Higher means *more different*. Two empty strings give
/// [`Error::EmptyInput`].
pub fn levenshtein_similarity(a: &str, b: &str) -> Result<f64> {
    let distance = levenshtein_distance(a, b);
    let longest = a.chars().count().max(b.chars().count());
    let micros = ratio_micros(distance as u64, longest as u64).ok_or(Error::EmptyInput)?;
    Ok(from_micros(micros))
}
