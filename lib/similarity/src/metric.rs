//! Metric identifiers
//!
//! The host names a metric with a short, case-sensitive identifier. Parsing
//! is total: anything outside [`MetricKind::ALL`] maps to `None` and is
//! handled as a zero-scoring no-op by the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Positional mismatch count over equal-length strings
    #[serde(rename = "hamming")]
    Hamming,
    /// Cosine over character ordinals, remapped to `[0, 1]`
    #[serde(rename = "cos")]
    Cosine,
    /// Cosine over sparse JSON histograms
    #[serde(rename = "hist_cos")]
    HistogramCosine,
    /// Inverse Euclidean distance over character ordinals
    #[serde(rename = "euclidean")]
    Euclidean,
    /// Normalized edit distance (higher = less similar)
    #[serde(rename = "levenshtein")]
    Levenshtein,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Hamming,
        MetricKind::Cosine,
        MetricKind::HistogramCosine,
        MetricKind::Euclidean,
        MetricKind::Levenshtein,
    ];

    /// Parse a host identifier. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hamming" => Some(Self::Hamming),
            "cos" => Some(Self::Cosine),
            "hist_cos" => Some(Self::HistogramCosine),
            "euclidean" => Some(Self::Euclidean),
            "levenshtein" => Some(Self::Levenshtein),
            _ => None,
        }
    }

    /// The identifier the host uses for this metric.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Cosine => "cos",
            Self::HistogramCosine => "hist_cos",
            Self::Euclidean => "euclidean",
            Self::Levenshtein => "levenshtein",
        }
    }

    /// Whether a higher score means a closer match.
    ///
    /// False only for Levenshtein, whose score is a normalized distance.
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, Self::Levenshtein)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric '{}'", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for metric in MetricKind::ALL {
            assert_eq!(MetricKind::from_name(metric.name()), Some(metric));
            assert_eq!(metric.to_string().parse::<MetricKind>().unwrap(), metric);
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(MetricKind::from_name("Hamming"), None);
        assert_eq!(MetricKind::from_name("COS"), None);
        assert_eq!(MetricKind::from_name("unknown_metric"), None);
        assert!("cosine".parse::<MetricKind>().is_err());
    }

    #[test]
    fn test_serde_uses_host_names() {
        let json = serde_json::to_string(&MetricKind::HistogramCosine).unwrap();
        assert_eq!(json, "\"hist_cos\"");
        let parsed: MetricKind = serde_json::from_str("\"levenshtein\"").unwrap();
        assert_eq!(parsed, MetricKind::Levenshtein);
    }

    #[test]
    fn test_higher_is_better() {
        assert!(MetricKind::Hamming.higher_is_better());
        assert!(!MetricKind::Levenshtein.higher_is_better());
    }
}
