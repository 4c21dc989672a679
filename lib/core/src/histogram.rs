//! Sparse histogram parsing
//!
//! Histogram payloads are flat JSON-like objects mapping bucket keys to
//! integer counts, e.g. `{"0": 12, "17": 3}`. Upstream producers sometimes
//! double-escape quotes or emit single-quoted keys, so the text is cleaned
//! before it reaches `serde_json`:
//!
//! 1. every `""` sequence is removed,
//! 2. single quotes are rewritten to double quotes.
//!
//! A top-level array is accepted too and keyed by element index.

use crate::error::{Error, Result};
use ahash::AHashMap;
use serde_json::Value;

/// Mapping from bucket key to occurrence count. Absent keys count as zero
/// and negative counts are clamped to zero.
#[derive(Debug, Clone, Default)]
pub struct SparseHistogram {
    counts: AHashMap<String, i64>,
}

impl SparseHistogram {
    /// Build a histogram from `(key, count)` pairs.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, i64)>,
    {
        Self {
            counts: pairs.into_iter().map(|(k, v)| (k.into(), v.max(0))).collect(),
        }
    }

    /// Parse histogram text, tolerating the quoting quirks described in the
    /// module docs.
    pub fn parse(text: &str) -> Result<Self> {
        let cleaned = clean(text);
        let value: Value =
            serde_json::from_str(&cleaned).map_err(|e| Error::Histogram(e.to_string()))?;

        let counts = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, v)| (key, count_of(&v)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), count_of(v)))
                .collect(),
            other => {
                return Err(Error::Histogram(format!(
                    "expected an object of counts, got {}",
                    kind_of(&other)
                )))
            }
        };

        Ok(Self { counts })
    }

    /// Count for `key`, zero when absent.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &i64)> {
        self.counts.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of squared counts.
    ///
    /// Accumulated in `f64` so that counts near `i64::MAX` stay finite.
    #[must_use]
    pub fn squared_norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&v| {
                let v = v as f64;
                v * v
            })
            .sum()
    }
}

fn clean(text: &str) -> String {
    text.replace("\"\"", "").replace('\'', "\"")
}

/// Integer count of a JSON value: floats truncate toward zero, numeric
/// strings are parsed, everything else is zero. Negative counts become zero.
fn count_of(value: &Value) -> i64 {
    raw_count(value).max(0)
}

fn raw_count(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
