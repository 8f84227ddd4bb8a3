// Unit tests for the scoring pipeline with synthetic embeddings.
//
// A small in-memory vocabulary stands in for a word2vec file, so these
// tests exercise validation, preprocessing, the empty-document policy,
// and the ordering contract without any model on disk.

use std::collections::HashSet;
use std::path::PathBuf;

use wordmover::config::Config;
use wordmover::embedding::WordEmbeddings;
use wordmover::error::ValidationError;
use wordmover::language::Language;
use wordmover::resources::LanguageResources;
use wordmover::scoring::{score_documents, score_pairs, validate};
use wordmover::similarity::traits::PairScorer;
use wordmover::similarity::wmd::WmdScorer;

fn docs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

/// English resources over a tiny synthetic vocabulary.
fn toy_resources() -> LanguageResources {
    let embeddings = WordEmbeddings::from_vectors(vec![
        ("cat".to_string(), vec![1.0, 0.0, 0.0]),
        ("kitten".to_string(), vec![0.9, 0.1, 0.0]),
        ("dog".to_string(), vec![0.6, 0.8, 0.0]),
        ("car".to_string(), vec![0.0, 0.0, 1.0]),
        ("engine".to_string(), vec![0.0, 0.3, 0.9]),
    ])
    .unwrap();
    let stopwords: HashSet<String> = ["the", "a", "my", "and"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    LanguageResources::new(Language::English, embeddings, stopwords)
}

// ============================================================
// Validation
// ============================================================

#[test]
fn mismatched_lengths_fail_before_scoring() {
    let resources = toy_resources();
    let err = score_pairs(
        &resources,
        &WmdScorer::default(),
        &docs(&["the cat"]),
        &docs(&["a dog", "a car"]),
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::LengthMismatch { left: 1, right: 2 })
    );
}

#[test]
fn empty_list_against_nonempty_is_a_length_mismatch() {
    let err = validate(&docs(&[]), &docs(&["a dog"])).unwrap_err();
    assert_eq!(err, ValidationError::LengthMismatch { left: 0, right: 1 });
}

#[test]
fn empty_request_is_rejected() {
    let resources = toy_resources();
    let err = score_pairs(&resources, &WmdScorer::default(), &[], &[]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::EmptyInput)
    );
}

#[test]
fn unsupported_language_tag_is_rejected() {
    let err = "fr".parse::<Language>().unwrap_err();
    assert_eq!(err, ValidationError::UnsupportedLanguage("fr".to_string()));
}

// ============================================================
// Scoring contract
// ============================================================

#[test]
fn output_length_matches_input_length() {
    let resources = toy_resources();
    let docs1 = docs(&["the cat", "my car", "a dog and a cat"]);
    let docs2 = docs(&["a kitten", "the engine", "the dog"]);
    let scores = score_pairs(&resources, &WmdScorer::default(), &docs1, &docs2).unwrap();
    assert_eq!(scores.len(), docs1.len());
    for score in &scores {
        assert!(score.is_finite() && (0.0..=1.0).contains(score), "got {score}");
    }
}

#[test]
fn identical_pairs_score_the_maximum() {
    let resources = toy_resources();
    let docs1 = docs(&["the cat and the dog", "my car engine"]);
    let scores = score_pairs(&resources, &WmdScorer::default(), &docs1, &docs1).unwrap();
    for score in &scores {
        assert!(
            *score > 0.95,
            "identical pair should score near 1.0, got {score}"
        );
    }

    // And strictly above a related-but-different pair.
    let other = score_pairs(
        &resources,
        &WmdScorer::default(),
        &docs(&["the cat"]),
        &docs(&["the car"]),
    )
    .unwrap();
    assert!(scores[0] > other[0]);
}

#[test]
fn scores_come_back_in_input_order() {
    let resources = toy_resources();
    let docs1 = docs(&["cat", "car"]);
    let docs2 = docs(&["kitten", "engine"]);
    let batch = score_pairs(&resources, &WmdScorer::default(), &docs1, &docs2).unwrap();

    // Each batch entry must equal the pair scored on its own.
    let scorer = WmdScorer::default();
    for (i, expected) in batch.iter().enumerate() {
        let single = scorer
            .score_pair(
                &resources.embeddings,
                &resources.preprocess(&docs1[i]),
                &resources.preprocess(&docs2[i]),
            )
            .unwrap();
        assert!(
            (single - expected).abs() < 1e-12,
            "pair {i}: batch {expected} vs single {single}"
        );
    }
}

#[test]
fn semantically_closer_pairs_rank_higher() {
    let resources = toy_resources();
    let scores = score_pairs(
        &resources,
        &WmdScorer::default(),
        &docs(&["the cat", "the cat"]),
        &docs(&["a kitten", "a car"]),
    )
    .unwrap();
    assert!(
        scores[0] > scores[1],
        "cat~kitten should beat cat~car: {scores:?}"
    );
}

// ============================================================
// Degenerate documents (defined policy: 0.0 + warning)
// ============================================================

#[test]
fn document_that_preprocesses_to_nothing_scores_zero() {
    let resources = toy_resources();
    let scores = score_pairs(
        &resources,
        &WmdScorer::default(),
        &docs(&["1234 !!", "the cat"]),
        &docs(&["the cat", "the a my"]),
    )
    .unwrap();
    assert_eq!(scores[0], 0.0, "numeric-only document should score 0.0");
    assert_eq!(scores[1], 0.0, "stopword-only document should score 0.0");
}

#[test]
fn out_of_vocabulary_document_scores_zero() {
    let resources = toy_resources();
    let scores = score_pairs(
        &resources,
        &WmdScorer::default(),
        &docs(&["zebra walrus"]),
        &docs(&["the cat"]),
    )
    .unwrap();
    assert_eq!(scores[0], 0.0);
}

// ============================================================
// End to end through the convenience entry (model on disk)
// ============================================================

/// Write a minimal word2vec binary and return its path.
fn write_toy_model() -> PathBuf {
    let mut payload = Vec::new();
    payload.extend_from_slice(b"3 3\n");
    for (token, vector) in [
        ("cat", [1.0_f32, 0.0, 0.0]),
        ("kitten", [0.9, 0.1, 0.0]),
        ("car", [0.0, 0.0, 1.0]),
    ] {
        payload.extend_from_slice(token.as_bytes());
        payload.push(b' ');
        for value in vector {
            payload.extend_from_slice(&value.to_le_bytes());
        }
        payload.push(b'\n');
    }

    let path = std::env::temp_dir().join(format!(
        "wordmover-test-{}-en-model.bin",
        std::process::id()
    ));
    std::fs::write(&path, payload).unwrap();
    path
}

#[test]
fn score_documents_loads_the_model_and_scores() {
    let model_path = write_toy_model();
    let config = Config {
        model_dir: PathBuf::from("/nonexistent"),
        data_dir: PathBuf::from("/nonexistent"),
        cn_model: None,
        // The per-language override wins over model_dir resolution,
        // and the missing stopword file falls back to the built-ins.
        en_model: Some(model_path.clone()),
    };

    let docs1 = docs(&["the cat", "a cat"]);
    let docs2 = docs(&["a kitten", "the car"]);
    let scores = score_documents(&config, Language::English, &docs1, &docs2).unwrap();
    std::fs::remove_file(&model_path).ok();

    assert_eq!(scores.len(), 2);
    assert!(scores.iter().all(|s| s.is_finite()));
    assert!(
        scores[0] > scores[1],
        "cat~kitten should beat cat~car: {scores:?}"
    );
}

#[test]
fn score_documents_fails_clearly_without_a_model() {
    let config = Config {
        model_dir: PathBuf::from("/nonexistent"),
        data_dir: PathBuf::from("/nonexistent"),
        cn_model: None,
        en_model: None,
    };
    let err = score_documents(
        &config,
        Language::English,
        &docs(&["the cat"]),
        &docs(&["a kitten"]),
    )
    .unwrap_err();
    assert!(
        err.to_string().contains("not found"),
        "expected an actionable message, got: {err}"
    );
}
