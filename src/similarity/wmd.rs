// Word Mover's Distance scorer.
//
// Each document becomes a normalized bag-of-words distribution over
// its unique in-vocabulary tokens; the cost of moving one bag onto the
// other is the pairwise Euclidean distance between the unit-length
// embedding vectors. The transport cost is converted to a similarity
// with 1 / (1 + distance), the same mapping the reference WMD
// similarity uses.

use std::collections::HashMap;

use anyhow::Result;
use ndarray::{Array1, Array2, ArrayView1};
use tracing::{debug, warn};

use super::traits::PairScorer;
use super::transport;
use crate::embedding::WordEmbeddings;

/// The default pair scorer.
///
/// The fields tune the transport solve; the defaults are fine for
/// short documents and only matter for very long ones.
pub struct WmdScorer {
    /// Entropic regularization strength.
    pub reg: f64,
    /// Iteration cap for the scaling loop.
    pub max_iter: usize,
    /// Marginal tolerance at which the solve stops early.
    pub tolerance: f64,
}

impl Default for WmdScorer {
    fn default() -> Self {
        Self {
            reg: 0.1,
            max_iter: 1000,
            tolerance: 1e-9,
        }
    }
}

impl PairScorer for WmdScorer {
    fn score_pair(
        &self,
        embeddings: &WordEmbeddings,
        doc1: &[String],
        doc2: &[String],
    ) -> Result<f64> {
        let (vectors1, weights1) = nbow(embeddings, doc1);
        let (vectors2, weights2) = nbow(embeddings, doc2);

        if vectors1.is_empty() || vectors2.is_empty() {
            // Defined policy for degenerate input: a side with no
            // in-vocabulary tokens carries no lexical signal, so the
            // pair scores zero instead of failing downstream.
            warn!(
                tokens1 = doc1.len(),
                tokens2 = doc2.len(),
                "No in-vocabulary tokens on one side of the pair, scoring 0.0"
            );
            return Ok(0.0);
        }

        let cost = cost_matrix(&vectors1, &vectors2);
        let plan = transport::sinkhorn_plan(
            &weights1,
            &weights2,
            &cost,
            self.reg,
            self.max_iter,
            self.tolerance,
        )?;
        let distance = transport::plan_cost(&plan, &cost);
        Ok(1.0 / (1.0 + distance))
    }
}

/// Normalized bag-of-words over the unique in-vocabulary tokens of a
/// document. Returns the embedding view and the weight for each unique
/// token, in first-seen order. Out-of-vocabulary tokens are dropped,
/// matching the reference behavior of scoring only words the model
/// knows.
fn nbow<'a>(
    embeddings: &'a WordEmbeddings,
    tokens: &[String],
) -> (Vec<ArrayView1<'a, f32>>, Array1<f64>) {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut dropped = 0usize;

    for token in tokens {
        if !embeddings.contains(token) {
            dropped += 1;
            continue;
        }
        let count = counts.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }
    if dropped > 0 {
        debug!(dropped, "Dropped out-of-vocabulary tokens");
    }

    let mut vectors = Vec::with_capacity(order.len());
    let mut weights = Vec::with_capacity(order.len());
    for token in &order {
        if let (Some(vector), Some(&count)) = (embeddings.embedding(token), counts.get(token)) {
            vectors.push(vector);
            weights.push(count as f64);
        }
    }

    let total: f64 = weights.iter().sum();
    let mut weights = Array1::from_vec(weights);
    if total > 0.0 {
        weights.mapv_inplace(|w| w / total);
    }
    (vectors, weights)
}

/// Pairwise Euclidean distances between two sets of embedding vectors.
fn cost_matrix(xs: &[ArrayView1<'_, f32>], ys: &[ArrayView1<'_, f32>]) -> Array2<f64> {
    let mut cost = Array2::zeros((xs.len(), ys.len()));
    for (i, x) in xs.iter().enumerate() {
        for (j, y) in ys.iter().enumerate() {
            let squared: f32 = x
                .iter()
                .zip(y.iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            cost[[i, j]] = f64::from(squared).sqrt();
        }
    }
    cost
}
