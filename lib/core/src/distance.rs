//! Raw distance primitives
//!
//! Strings are compared as sequences of Unicode scalar values; positional
//! metrics treat each character's ordinal as one vector component. None of
//! these functions round or normalize, see [`crate::similarity`] for that.

use crate::error::{Error, Result};
use crate::histogram::SparseHistogram;

/// Collect both strings as character vectors, enforcing equal length.
fn positional_pair(a: &str, b: &str) -> Result<(Vec<char>, Vec<char>)> {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();
    if left.len() != right.len() {
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok((left, right))
}

/// Number of positions at which the two strings differ.
///
/// Both strings must have the same length.
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    let (left, right) = positional_pair(a, b)?;
    Ok(left.iter().zip(&right).filter(|(x, y)| x != y).count())
}

/// Euclidean distance between the character-ordinal vectors of two
/// equal-length strings.
pub fn euclidean_distance(a: &str, b: &str) -> Result<f64> {
    let (left, right) = positional_pair(a, b)?;
    let sum: u128 = left
        .iter()
        .zip(&right)
        .map(|(&x, &y)| {
            let d = (x as i64 - y as i64).unsigned_abs() as u128;
            d * d
        })
        .sum();
    Ok((sum as f64).sqrt())
}

/// Levenshtein edit distance with unit costs for insertion, deletion and
/// substitution.
///
/// Uses the classic DP recurrence with two rolling rows, so memory is
/// O(len(b)). Accepts any pair of lengths, including empty strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Cosine of the angle between the character-ordinal vectors of two
/// equal-length strings, in `[-1, 1]`.
///
/// Returns [`Error::ZeroNorm`] if either vector has zero norm (an empty
/// string, or one made only of `'\0'`).
pub fn cosine_raw(a: &str, b: &str) -> Result<f64> {
    let (left, right) = positional_pair(a, b)?;
    let mut dot: u128 = 0;
    let mut norm_a: u128 = 0;
    let mut norm_b: u128 = 0;
    for (&x, &y) in left.iter().zip(&right) {
        let (x, y) = (x as u128, y as u128);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0 || norm_b == 0 {
        return Err(Error::ZeroNorm);
    }
    Ok(dot as f64 / ((norm_a as f64).sqrt() * (norm_b as f64).sqrt()))
}

/// Cosine between two sparse histograms over the union of their keys.
///
/// Keys missing on one side count as zero. Counts are accumulated in `f64`,
/// so the result stays finite for any count. Returns `None` when either
/// histogram has zero norm.
pub fn histogram_cosine_raw(h1: &SparseHistogram, h2: &SparseHistogram) -> Option<f64> {
    // Keys only in h2 contribute nothing to the dot product
    let dot: f64 = h1
        .iter()
        .map(|(key, &v1)| v1 as f64 * h2.get(key) as f64)
        .sum();
    let norm1 = h1.squared_norm();
    let norm2 = h2.squared_norm();
    if norm1 == 0.0 || norm2 == 0.0 {
        return None;
    }
    let cos = dot / (norm1.sqrt() * norm2.sqrt());
    cos.is_finite().then(|| cos.clamp(-1.0, 1.0))
}
