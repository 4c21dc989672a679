//! Document field values and the lookup seam the host implements.

use ahash::AHashMap;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A field value read from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single fingerprint, hash or histogram payload
    Single(String),
    /// Several candidate strings; only Levenshtein accepts this shape
    Candidates(Vec<String>),
}

impl FieldValue {
    /// Convert a JSON source value.
    ///
    /// Strings map to [`FieldValue::Single`], numbers and booleans to their
    /// text form, arrays to [`FieldValue::Candidates`] (null elements are
    /// dropped). `null`, and nested objects, have no usable value.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::Candidates(
                items.iter().filter_map(scalar_text).collect(),
            )),
            other => scalar_text(other).map(Self::Single),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Candidates(values)
    }
}

/// Per-document field access provided by the host.
///
/// Implementations must be cheap to call repeatedly: the aggregator looks up
/// the base field and, in multi mode, every rotated variant.
pub trait FieldLookup {
    /// Value of `field` in this document, `None` when absent.
    fn get(&self, field: &str) -> Option<FieldValue>;
}

/// A document `_source` object.
impl FieldLookup for Value {
    fn get(&self, field: &str) -> Option<FieldValue> {
        self.as_object()?.get(field).and_then(FieldValue::from_json)
    }
}

impl FieldLookup for Map<String, Value> {
    fn get(&self, field: &str) -> Option<FieldValue> {
        Map::get(self, field).and_then(FieldValue::from_json)
    }
}

impl<S: BuildHasher> FieldLookup for HashMap<String, FieldValue, S> {
    fn get(&self, field: &str) -> Option<FieldValue> {
        HashMap::get(self, field).cloned()
    }
}

impl FieldLookup for AHashMap<String, FieldValue> {
    fn get(&self, field: &str) -> Option<FieldValue> {
        (**self).get(field).cloned()
    }
}

impl<T: FieldLookup + ?Sized> FieldLookup for &T {
    fn get(&self, field: &str) -> Option<FieldValue> {
        (**self).get(field)
    }
}
