//! # simscore Similarity
//!
//! Metric dispatch and rotation-invariant scoring on top of
//! [`simscore_core`].
//!
//! This crate is what a search host calls per document: it compiles a metric
//! name and parameter map into a [`ScoreScript`], reads field values through
//! the [`FieldLookup`] seam, and returns one rounded `f64` per document.
//!
//! ## Features
//!
//! - **Closed metric set**: `hamming`, `cos`, `hist_cos`, `euclidean`,
//!   `levenshtein`; unknown names score `0`
//! - **Candidate lists**: Levenshtein accepts an array of strings per field
//! - **Rotation invariance**: with `multi`, the fingerprint variants stored
//!   under `field + suffix` are scored too and the best one wins
//! - **Parallel batches**: score many documents with rayon
//!
//! ## Example
//!
//! ```rust
//! use simscore_similarity::ScoreScript;
//! use serde_json::json;
//!
//! let params = json!({"field": "phash", "term": "1001", "multi": "true"});
//! let script = ScoreScript::compile("hamming", params.as_object().unwrap()).unwrap();
//!
//! let doc = json!({"phash": "1010", "phashy": "1001"});
//! assert_eq!(script.score(&doc).unwrap(), 1.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ ScoreScript │────>│  Dispatch   │────>│ Normalizers │
//! │ (variants)  │     │ (metric)    │     │   (core)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │
//!       │              ┌─────────────┐
//!       └─────────────>│ FieldLookup │
//!                      │   (host)    │
//!                      └─────────────┘
//! ```

pub mod dispatch;
pub mod field;
pub mod metric;
pub mod params;
pub mod script;

// Re-export main types for convenience
pub use dispatch::{compute_similarity, compute_similarity_named, compute_similarity_with};
pub use field::{FieldLookup, FieldValue};
pub use metric::{MetricKind, UnknownMetric};
pub use params::{EuclideanMode, ScoreParameters, DEFAULT_VARIANT_SUFFIXES};
pub use script::{ScoreScript, SCRIPT_LANG};
