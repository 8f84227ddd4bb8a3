// Pair scorer trait — swap-ready abstraction.
//
// The pipeline treats the similarity computation as an opaque
// capability: given two preprocessed token lists over a shared
// embedding space, produce one scalar. The default implementation is
// WmdScorer; anything honoring this contract can replace it without
// touching preprocessing or orchestration.

use anyhow::Result;

use crate::embedding::WordEmbeddings;

/// Score one preprocessed document pair in the given embedding space.
pub trait PairScorer {
    /// Returns a similarity in [0.0, 1.0], where 1.0 means the
    /// documents are indistinguishable under the scorer's distance.
    fn score_pair(
        &self,
        embeddings: &WordEmbeddings,
        doc1: &[String],
        doc2: &[String],
    ) -> Result<f64>;
}
