// Integration tests for simscore
use serde_json::{json, Map, Value};
use simscore::prelude::*;
use simscore::{compute_similarity_named, histogram_cosine_similarity, SCRIPT_LANG};
use std::collections::HashMap;

fn params(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("simscore=debug,simscore_similarity=debug,simscore_core=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_hamming_query_over_documents() -> anyhow::Result<()> {
    let script =
        ScoreScript::compile("hamming", &params(json!({"field": "phash", "term": "10110010"})))?;

    let docs = vec![
        json!({"phash": "10110010"}),
        json!({"phash": "10110000"}),
        json!({"phash": "01001101"}),
    ];
    let scores: Vec<f64> = docs.iter().map(|d| script.score(d)).collect::<Result<_>>()?;

    assert_eq!(scores, vec![1.0, 0.875, 0.0]);
    Ok(())
}

#[test]
fn test_rotation_invariant_matching() -> anyhow::Result<()> {
    init_tracing();
    let script = ScoreScript::compile(
        "hamming",
        &params(json!({"field": "phash", "term": "1100", "multi": "true"})),
    )?;

    // The query image was rotated 180 degrees relative to the indexed one
    let rotated = json!({
        "phash": "0011",
        "phashx": "0110",
        "phashy": "1100",
        "phashz": "1001",
        "phashh": "0011",
        "phashv": "1100",
    });
    let unrelated = json!({
        "phash": "0101",
        "phashx": "1010",
        "phashy": "0101",
        "phashz": "1010",
        "phashh": "1010",
        "phashv": "0101",
    });

    assert_eq!(script.score(&rotated)?, 1.0);
    assert_eq!(script.score(&unrelated)?, 0.5);

    // Same documents without multi only see the base field
    let base_only =
        ScoreScript::compile("hamming", &params(json!({"field": "phash", "term": "1100"})))?;
    assert_eq!(base_only.score(&rotated)?, 0.0);
    assert!(script.score(&rotated)? >= base_only.score(&rotated)?);
    Ok(())
}

#[test]
fn test_histogram_query() -> anyhow::Result<()> {
    let script = ScoreScript::compile(
        "hist_cos",
        &params(json!({"field": "color_hist", "term": "{\"0\": 10, \"3\": 5, \"511\": 1}"})),
    )?;

    let same = json!({"color_hist": "{'0': 10, '3': 5, '511': 1}"});
    let disjoint = json!({"color_hist": "{\"1\": 7}"});
    let broken = json!({"color_hist": "{not json"});
    let blank = json!({"color_hist": "  "});

    assert_eq!(script.score(&same)?, 1.0);
    assert_eq!(script.score(&disjoint)?, 0.0);
    assert_eq!(script.score(&broken)?, 0.0);
    assert_eq!(script.score(&blank)?, 0.0);
    assert_eq!(script.score(&json!({}))?, 0.0);
    Ok(())
}

#[test]
fn test_histogram_null_inputs() {
    assert_eq!(histogram_cosine_similarity(Some(""), Some("{\"0\": 1}")), 0.0);
    assert_eq!(histogram_cosine_similarity(Some("{\"0\": 1}"), None), 0.0);
}

#[test]
fn test_levenshtein_candidates_scenario() -> anyhow::Result<()> {
    let script =
        ScoreScript::compile("levenshtein", &params(json!({"field": "names", "term": "abd"})))?;

    // Normalized distances are 1/3 and 3/3; the maximum is kept
    assert_eq!(script.score(&json!({"names": ["abc", "xyz"]}))?, 1.0);
    assert_eq!(script.score(&json!({"names": []}))?, 0.0);
    assert_eq!(script.score(&json!({"names": "abc"}))?, 0.333333);
    Ok(())
}

#[test]
fn test_unknown_metric_never_fails() -> anyhow::Result<()> {
    init_tracing();
    let script =
        ScoreScript::compile("unknown_metric", &params(json!({"field": "f", "term": "x"})))?;
    for doc in [json!({"f": "x"}), json!({"f": ["a", "b"]}), json!({}), json!(null)] {
        assert_eq!(script.score(&doc)?, 0.0);
    }
    assert_eq!(compute_similarity_named("unknown_metric", "x", None)?, 0.0);

    let bare = ScoreScript::compile("unknown_metric", &Map::new())?;
    assert_eq!(bare.score(&json!({"f": "x"}))?, 0.0);
    Ok(())
}

#[test]
fn test_cosine_query_with_typed_lookup() -> anyhow::Result<()> {
    let script = ScoreScript::new(
        MetricKind::Cosine,
        ScoreParameters::new("sig", "abc").with_multi(true),
    );

    let mut doc = HashMap::new();
    doc.insert("sig".to_string(), FieldValue::from("abd"));
    doc.insert("sigx".to_string(), FieldValue::from("abc"));

    assert_eq!(script.score(&doc)?, 1.0);
    Ok(())
}

#[test]
fn test_euclidean_identical_document_is_error() {
    let script = ScoreScript::new(MetricKind::Euclidean, ScoreParameters::new("f", "ab"));

    assert_eq!(script.score(&json!({"f": "df"})), Ok(0.2));
    assert_eq!(script.score(&json!({"f": "ab"})), Err(Error::ZeroDistance));
    assert_eq!(script.score_lossy(&json!({"f": "ab"})), 0.0);

    let smoothed = ScoreScript::new(
        MetricKind::Euclidean,
        ScoreParameters::new("f", "ab").with_euclidean_mode(EuclideanMode::Smoothed),
    );
    assert_eq!(smoothed.score(&json!({"f": "ab"})), Ok(1.0));
}

#[test]
fn test_batch_scoring_continues_after_failures() {
    let script = ScoreScript::new(MetricKind::Hamming, ScoreParameters::new("phash", "1010"));

    let docs: Vec<Value> = (0..64)
        .map(|i| match i % 4 {
            0 => json!({"phash": "1010"}),
            1 => json!({"phash": "1011"}),
            2 => json!({"phash": "10101"}),
            _ => json!({"other": "1010"}),
        })
        .collect();

    let results = script.score_batch(&docs);
    assert_eq!(results.len(), docs.len());
    for (i, result) in results.iter().enumerate() {
        match i % 4 {
            0 => assert_eq!(*result, Ok(1.0)),
            1 => assert_eq!(*result, Ok(0.75)),
            2 => assert!(matches!(result, Err(Error::LengthMismatch { left: 5, right: 4 }))),
            _ => assert_eq!(*result, Ok(0.0)),
        }
    }

    let lossy = script.score_batch_lossy(&docs);
    assert_eq!(lossy.iter().filter(|&&s| s == 0.0).count(), 32);
}

#[test]
fn test_compile_errors() {
    assert!(matches!(
        ScoreScript::compile("hamming", &params(json!({"field": "f"}))),
        Err(Error::MissingParameter("term"))
    ));
    assert!(matches!(
        ScoreScript::compile("hamming", &params(json!({"field": "f", "term": {"a": 1}}))),
        Err(Error::InvalidParameters(_))
    ));
}

#[test]
fn test_script_lang() {
    let script = ScoreScript::new(MetricKind::Hamming, ScoreParameters::new("f", "1"));
    assert_eq!(script.lang(), SCRIPT_LANG);
    assert_eq!(SCRIPT_LANG, "wv_similarity");
}
