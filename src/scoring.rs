// The scoring pipeline: validate the request shape, preprocess both
// sides of every pair, and score them strictly in input order.
//
// Validation runs before any resource loading so a malformed request
// never pays the model-load cost.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ValidationError;
use crate::language::Language;
use crate::resources::LanguageResources;
use crate::similarity::traits::PairScorer;
use crate::similarity::wmd::WmdScorer;

/// One scored document pair, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPair {
    pub doc1: String,
    pub doc2: String,
    pub similarity: f64,
}

/// Check the shape of a scoring request.
///
/// Mismatched lengths are reported first, so an empty list against a
/// non-empty one is a `LengthMismatch`, not `EmptyInput`.
pub fn validate(docs1: &[String], docs2: &[String]) -> Result<(), ValidationError> {
    if docs1.len() != docs2.len() {
        return Err(ValidationError::LengthMismatch {
            left: docs1.len(),
            right: docs2.len(),
        });
    }
    if docs1.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}

/// Score every pair (docs1[i], docs2[i]) with already-loaded resources.
///
/// Returns one similarity per pair, in input order. Fails fast on the
/// first pair the scorer rejects; there are no partial results.
pub fn score_pairs(
    resources: &LanguageResources,
    scorer: &dyn PairScorer,
    docs1: &[String],
    docs2: &[String],
) -> Result<Vec<f64>> {
    validate(docs1, docs2)?;

    info!(pairs = docs1.len(), "Calculating similarity...");
    let mut scores = Vec::with_capacity(docs1.len());
    for (index, (doc1, doc2)) in docs1.iter().zip(docs2.iter()).enumerate() {
        let tokens1 = resources.preprocess(doc1);
        let tokens2 = resources.preprocess(doc2);
        let score = scorer
            .score_pair(&resources.embeddings, &tokens1, &tokens2)
            .with_context(|| format!("failed to score pair {index}"))?;
        debug!(index, score, "Scored pair");
        scores.push(score);
    }
    Ok(scores)
}

/// Convenience entry matching the original invocation contract: load
/// the language's resources once, then score the pairs with the
/// default WMD scorer. Callers with many batches should load
/// `LanguageResources` themselves and call `score_pairs` to avoid
/// re-reading the model.
pub fn score_documents(
    config: &Config,
    language: Language,
    docs1: &[String],
    docs2: &[String],
) -> Result<Vec<f64>> {
    validate(docs1, docs2)?;
    let resources = LanguageResources::load(config, language)?;
    score_pairs(&resources, &WmdScorer::default(), docs1, docs2)
}
