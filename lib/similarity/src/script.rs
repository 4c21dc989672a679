//! Compiled scoring script
//!
//! A [`ScoreScript`] is built once per query from the host's metric name and
//! parameter map, then scores documents one at a time. Scoring reads the base
//! field and, in multi mode, each precomputed rotated/flipped variant of the
//! fingerprint, and returns the best score among them. The document stores
//! only the transformed encodings, so this is an exhaustive best-of-N over a
//! short fixed list.
//!
//! ```text
//!  params ──> compile ──> ScoreScript ──┬──> field        ──┐
//!                                       ├──> field + "x"  ──┤
//!                                       ├──> ...          ──┼──> max ──> score
//!                                       └──> field + "v"  ──┘
//! ```

use crate::dispatch::compute_similarity_with;
use crate::field::FieldLookup;
use crate::metric::MetricKind;
use crate::params::ScoreParameters;
use rayon::prelude::*;
use serde_json::{Map, Value};
use simscore_core::Result;
use tracing::{debug, warn};

/// Script language name under which the host registers this engine.
pub const SCRIPT_LANG: &str = "wv_similarity";

/// A compiled, immutable scoring query. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct ScoreScript {
    metric: Option<MetricKind>,
    params: ScoreParameters,
}

impl ScoreScript {
    /// Build a script from already-parsed parts.
    pub fn new(metric: MetricKind, params: ScoreParameters) -> Self {
        Self {
            metric: Some(metric),
            params,
        }
    }

    /// Compile a host metric name and parameter map.
    ///
    /// An unrecognized metric name is not an error: the resulting script
    /// scores every document `0.0` whatever its parameters. For a known
    /// metric, missing or malformed parameters are.
    pub fn compile(metric_name: &str, params: &Map<String, Value>) -> Result<Self> {
        let Some(metric) = MetricKind::from_name(metric_name) else {
            warn!("Unknown similarity metric '{}', all documents will score 0", metric_name);
            let params = ScoreParameters::from_map(params).unwrap_or_else(|e| {
                debug!("Ignoring parameters of unknown metric: {}", e);
                ScoreParameters::new("", "")
            });
            return Ok(Self {
                metric: None,
                params,
            });
        };

        let params = ScoreParameters::from_map(params)?;
        debug!(
            %metric,
            field = params.field(),
            multi = params.multi(),
            higher_is_better = metric.higher_is_better(),
            "Compiled score script"
        );
        Ok(Self::new(metric, params))
    }

    /// Script language name, see [`SCRIPT_LANG`].
    pub fn lang(&self) -> &'static str {
        SCRIPT_LANG
    }

    pub fn metric(&self) -> Option<MetricKind> {
        self.metric
    }

    pub fn params(&self) -> &ScoreParameters {
        &self.params
    }

    /// Score one document.
    ///
    /// Returns the maximum over the base field and, when `multi` is set,
    /// every variant field. Absent fields score `0.0`. The first failing
    /// field aborts this document's score.
    pub fn score<D: FieldLookup + ?Sized>(&self, doc: &D) -> Result<f64> {
        let Some(metric) = self.metric else {
            return Ok(0.0);
        };

        let mut best: Option<f64> = None;
        for field in self.params.field_names() {
            let value = doc.get(&field);
            let similarity = compute_similarity_with(
                metric,
                self.params.term(),
                value.as_ref(),
                self.params.euclidean_mode(),
            )?;
            best = Some(match best {
                Some(current) if current >= similarity => current,
                _ => similarity,
            });
        }
        Ok(best.unwrap_or(0.0))
    }

    /// Score one document, degrading any failure to `0.0` with a warning.
    pub fn score_lossy<D: FieldLookup + ?Sized>(&self, doc: &D) -> f64 {
        self.score(doc).unwrap_or_else(|e| {
            warn!(field = self.params.field(), "Document left unscored: {}", e);
            0.0
        })
    }

    /// Score many documents in parallel, one result per document, in input
    /// order.
    pub fn score_batch<D: FieldLookup + Sync>(&self, docs: &[D]) -> Vec<Result<f64>> {
        docs.par_iter().map(|doc| self.score(doc)).collect()
    }

    /// Parallel [`ScoreScript::score_lossy`].
    pub fn score_batch_lossy<D: FieldLookup + Sync>(&self, docs: &[D]) -> Vec<f64> {
        docs.par_iter().map(|doc| self.score_lossy(doc)).collect()
    }
}
