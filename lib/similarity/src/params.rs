//! Per-query scoring parameters
//!
//! Parsed once when a query is compiled and shared read-only by every
//! document scored for it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use simscore_core::{Error, Result};

/// Field suffixes of the precomputed rotated/flipped fingerprints, in order:
/// rotate left 90°, 180°, 270°, horizontal flip, vertical flip.
pub const DEFAULT_VARIANT_SUFFIXES: [&str; 5] = ["x", "y", "z", "h", "v"];

/// Which Euclidean similarity formula to apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EuclideanMode {
    /// `1 / distance`; identical inputs are a domain error
    #[default]
    Literal,
    /// `1 / (1 + distance)`, bounded in `(0, 1]`
    Smoothed,
}

/// Immutable parameters of one scoring query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreParameters {
    /// Also score the rotated variants and keep the maximum
    #[serde(default, deserialize_with = "lenient_flag")]
    multi: bool,

    /// Base field name
    field: String,

    /// Query value compared against the field
    #[serde(deserialize_with = "scalar_text")]
    term: String,

    /// Suffixes appended to `field` to find the variants
    #[serde(default = "default_suffixes")]
    suffixes: Vec<String>,

    #[serde(default)]
    euclidean: EuclideanMode,
}

fn default_suffixes() -> Vec<String> {
    DEFAULT_VARIANT_SUFFIXES.iter().map(|s| s.to_string()).collect()
}

/// `true` or `"true"` enable the flag, anything else disables it.
fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s == "true",
        _ => false,
    })
}

fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, number or boolean term, got {}",
            other
        ))),
    }
}

impl ScoreParameters {
    /// Single-field parameters with default options.
    pub fn new(field: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            multi: false,
            field: field.into(),
            term: term.into(),
            suffixes: default_suffixes(),
            euclidean: EuclideanMode::default(),
        }
    }

    /// Parse the host's parameter map.
    ///
    /// `field` and `term` are required; `multi`, `suffixes` and `euclidean`
    /// fall back to their defaults.
    pub fn from_map(params: &Map<String, Value>) -> Result<Self> {
        for key in ["field", "term"] {
            if params.get(key).map_or(true, Value::is_null) {
                return Err(Error::MissingParameter(key));
            }
        }
        serde_json::from_value(Value::Object(params.clone()))
            .map_err(|e| Error::InvalidParameters(e.to_string()))
    }

    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_euclidean_mode(mut self, mode: EuclideanMode) -> Self {
        self.euclidean = mode;
        self
    }

    #[inline]
    pub fn multi(&self) -> bool {
        self.multi
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[inline]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    #[inline]
    pub fn euclidean_mode(&self) -> EuclideanMode {
        self.euclidean
    }

    /// Field names to score: the base field, then one per suffix when
    /// `multi` is set.
    pub fn field_names(&self) -> impl Iterator<Item = String> + '_ {
        let variants = if self.multi { self.suffixes.as_slice() } else { &[] };
        std::iter::once(self.field.clone())
            .chain(variants.iter().map(move |suffix| format!("{}{}", self.field, suffix)))
    }
}
