//! Metric dispatch
//!
//! Routes one field value to the normalizer for the selected metric and
//! enforces the input shape each metric accepts.

use crate::field::FieldValue;
use crate::metric::MetricKind;
use crate::params::EuclideanMode;
use simscore_core::{
    cosine_similarity, euclidean_similarity, hamming_similarity, histogram_cosine_similarity,
    levenshtein_similarity, smoothed_euclidean_similarity, Error, Result,
};
use tracing::{trace, warn};

/// Score one field value against `term` with the literal Euclidean formula.
///
/// See [`compute_similarity_with`] for the shape rules.
pub fn compute_similarity(
    metric: MetricKind,
    term: &str,
    value: Option<&FieldValue>,
) -> Result<f64> {
    compute_similarity_with(metric, term, value, EuclideanMode::Literal)
}

/// Score one field value against `term`.
///
/// - An absent value scores `0.0` for every metric.
/// - Hamming, cosine, Euclidean and histogram cosine need a single value;
///   a candidate list is a configuration error.
/// - Levenshtein takes the maximum over a candidate list, `0.0` when the
///   list is empty. Its score grows with the edit distance, so the maximum
///   picks the *least* similar candidate.
pub fn compute_similarity_with(
    metric: MetricKind,
    term: &str,
    value: Option<&FieldValue>,
    euclidean: EuclideanMode,
) -> Result<f64> {
    let Some(value) = value else {
        trace!(%metric, "Field value absent, scoring 0");
        return Ok(0.0);
    };

    match (metric, value) {
        (MetricKind::Levenshtein, FieldValue::Single(s)) => levenshtein_similarity(term, s),
        (MetricKind::Levenshtein, FieldValue::Candidates(candidates)) => {
            candidates.iter().try_fold(0.0f64, |best, candidate| -> Result<f64> {
                Ok(best.max(levenshtein_similarity(term, candidate)?))
            })
        }
        (metric, FieldValue::Candidates(_)) => Err(Error::UnsupportedShape {
            metric: metric.to_string(),
        }),
        (MetricKind::Hamming, FieldValue::Single(s)) => hamming_similarity(s, term),
        (MetricKind::Cosine, FieldValue::Single(s)) => cosine_similarity(s, term),
        (MetricKind::HistogramCosine, FieldValue::Single(s)) => {
            Ok(histogram_cosine_similarity(Some(s.as_str()), Some(term)))
        }
        (MetricKind::Euclidean, FieldValue::Single(s)) => match euclidean {
            EuclideanMode::Literal => euclidean_similarity(s, term),
            EuclideanMode::Smoothed => smoothed_euclidean_similarity(s, term),
        },
    }
}

/// Dispatch on a host metric identifier. Unknown identifiers score `0.0`.
pub fn compute_similarity_named(name: &str, term: &str, value: Option<&FieldValue>) -> Result<f64> {
    match MetricKind::from_name(name) {
        Some(metric) => compute_similarity(metric, term, value),
        None => {
            warn!("Unknown similarity metric '{}', scoring 0", name);
            Ok(0.0)
        }
    }
}
