//! # simscore Core
//!
//! Distance primitives and similarity normalizers for the simscore scoring
//! engine.
//!
//! - [`distance`] - raw distances: Hamming, Euclidean, Levenshtein, cosine
//!   over character ordinals, cosine over sparse histograms
//! - [`similarity`] - bounded, rounded scores built on those distances
//! - [`histogram`] - lenient parsing of JSON histogram payloads
//! - [`rounding`] - the six-digit, round-half-up policy every score follows
//!
//! ## Example
//!
//! ```rust
//! use simscore_core::{hamming_similarity, levenshtein_distance};
//!
//! assert_eq!(hamming_similarity("1010", "1001").unwrap(), 0.5);
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! ```

pub mod distance;
pub mod error;
pub mod histogram;
pub mod rounding;
pub mod similarity;

pub use distance::{
    cosine_raw, euclidean_distance, hamming_distance, histogram_cosine_raw, levenshtein_distance,
};
pub use error::{Error, Result};
pub use histogram::SparseHistogram;
pub use rounding::{round_half_up, round_ratio, SCALE};
pub use similarity::{
    cosine_similarity, euclidean_similarity, hamming_similarity, histogram_cosine_similarity,
    levenshtein_similarity, smoothed_euclidean_similarity,
};
