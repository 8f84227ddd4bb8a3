// Pretrained word embeddings — the shared vector space both documents
// of a pair are scored in.
//
// The model is a plain vocabulary → vector table loaded from a
// word2vec binary file. Every construction path normalizes vectors to
// unit length in place, so downstream distance code can rely on that
// invariant. The table is read-only after construction.

pub mod word2vec;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array2, ArrayView1};
use tracing::info;

/// A vocabulary of words mapped to unit-length embedding vectors.
#[derive(Debug)]
pub struct WordEmbeddings {
    vocab: HashMap<String, usize>,
    vectors: Array2<f32>,
}

impl WordEmbeddings {
    /// Load a word2vec binary model from disk and normalize it.
    ///
    /// This is the expensive step of the whole pipeline — the English
    /// reference model is several gigabytes — so callers load once per
    /// batch of pairs, never per pair.
    pub fn load_word2vec(path: &Path) -> Result<Self> {
        info!("Loading word2vec model...");
        let file = File::open(path)
            .with_context(|| format!("failed to open word2vec model: {}", path.display()))?;
        let mut reader = BufReader::new(file);
        let embeddings = word2vec::read_word2vec(&mut reader)
            .with_context(|| format!("failed to parse word2vec model: {}", path.display()))?;
        info!(
            words = embeddings.len(),
            dim = embeddings.dim(),
            "Loaded word2vec model"
        );
        Ok(embeddings)
    }

    /// Build a model from in-memory (token, vector) pairs.
    ///
    /// All vectors must share one dimension. Intended for callers that
    /// produce embeddings elsewhere, and for tests that need a small
    /// synthetic vocabulary without a model file.
    pub fn from_vectors(entries: Vec<(String, Vec<f32>)>) -> Result<Self> {
        let dim = match entries.first() {
            Some((_, v)) => v.len(),
            None => 0,
        };
        let mut tokens = Vec::with_capacity(entries.len());
        let mut data = Vec::with_capacity(entries.len() * dim);
        for (token, vector) in entries {
            if vector.len() != dim {
                anyhow::bail!(
                    "embedding for {token:?} has dimension {} but expected {dim}",
                    vector.len()
                );
            }
            tokens.push(token);
            data.extend_from_slice(&vector);
        }
        let rows = tokens.len();
        let vectors = Array2::from_shape_vec((rows, dim), data)
            .context("embedding data does not form a rectangular matrix")?;
        Ok(Self::from_parts(tokens, vectors))
    }

    /// Assemble the table and establish the unit-norm invariant.
    /// Duplicate tokens keep their first vector.
    pub(crate) fn from_parts(tokens: Vec<String>, mut vectors: Array2<f32>) -> Self {
        for mut row in vectors.rows_mut() {
            let norm = row.iter().map(|v| v * v).sum::<f32>().sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }
        let mut vocab = HashMap::with_capacity(tokens.len());
        for (index, token) in tokens.into_iter().enumerate() {
            vocab.entry(token).or_insert(index);
        }
        Self { vocab, vectors }
    }

    /// Look up the unit-length vector for a word, if it is in vocabulary.
    pub fn embedding(&self, word: &str) -> Option<ArrayView1<'_, f32>> {
        self.vocab.get(word).map(|&index| self.vectors.row(index))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocab.contains_key(word)
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Embedding dimension.
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }
}
