//! # simscore
//!
//! Relevance scoring for search hosts: compare a query term with a document
//! field and return one bounded, six-decimal similarity score.
//!
//! simscore targets image-derived fingerprints (perceptual hashes, colour
//! histograms, feature strings). Because a picture may have been indexed in
//! any orientation, documents can carry precomputed rotated and flipped
//! encodings of the same fingerprint; in multi mode every variant is scored
//! and the best one wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use simscore::prelude::*;
//! use serde_json::json;
//!
//! // Compile once per query
//! let params = json!({"field": "phash", "term": "1001", "multi": true});
//! let script = ScoreScript::compile("hamming", params.as_object().unwrap()).unwrap();
//!
//! // Score each document
//! let doc = json!({"phash": "1010", "phashh": "1001"});
//! assert_eq!(script.score(&doc).unwrap(), 1.0);
//! ```
//!
//! ## Metrics
//!
//! | Name | Score | Range |
//! |---|---|---|
//! | `hamming` | `1 - mismatches / len` | `[0, 1]` |
//! | `cos` | `0.5 * cos + 0.5` over character codes | `[0, 1]` |
//! | `hist_cos` | cosine over sparse JSON histograms | `[-1, 1]` |
//! | `euclidean` | `1 / distance` (or `1 / (1 + distance)`) | `[0, inf)` |
//! | `levenshtein` | `edits / max len`, **higher = less similar** | `[0, 1]` |
//!
//! ## Crate Structure
//!
//! - [`simscore-core`](https://docs.rs/simscore-core) - Distance primitives,
//!   normalizers, rounding, histogram parsing
//! - [`simscore-similarity`](https://docs.rs/simscore-similarity) - Metric
//!   dispatch, parameters, variant aggregation

// Re-export core types
pub use simscore_core::{
    cosine_similarity, euclidean_similarity, hamming_similarity, histogram_cosine_similarity,
    levenshtein_similarity, smoothed_euclidean_similarity,
    Error, Result, SparseHistogram,
};

// Re-export scoring
pub use simscore_similarity::{
    compute_similarity, compute_similarity_named,
    EuclideanMode, FieldLookup, FieldValue, MetricKind, ScoreParameters, ScoreScript,
    DEFAULT_VARIANT_SUFFIXES, SCRIPT_LANG,
};

/// Raw distance primitives
pub mod distance {
    pub use simscore_core::distance::{
        cosine_raw, euclidean_distance, hamming_distance, histogram_cosine_raw,
        levenshtein_distance,
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, Result,
        EuclideanMode, FieldLookup, FieldValue, MetricKind, ScoreParameters, ScoreScript,
    };
    pub use serde_json::{Map, Value};
}
