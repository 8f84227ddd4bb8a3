// Per-language scoring resources, loaded once and passed by reference.
//
// The original design this replaces kept the model and stopwords in
// ambient module state; here the caller owns an explicit read-only
// bundle. Loading is the expensive step (the model dominates
// wall-clock cost), so callers scoring many pairs construct this once
// per batch.

use std::collections::HashSet;

use anyhow::Result;

use crate::config::Config;
use crate::embedding::WordEmbeddings;
use crate::language::Language;
use crate::preprocess::traits::Preprocessor;
use crate::stopwords;

/// Everything needed to preprocess and score documents in one language.
pub struct LanguageResources {
    pub language: Language,
    pub embeddings: WordEmbeddings,
    pub stopwords: HashSet<String>,
    preprocessor: Box<dyn Preprocessor>,
}

impl LanguageResources {
    /// Load resources by convention: model and stopword paths resolved
    /// from the configuration, stopwords falling back to the built-in
    /// list when no file is present.
    pub fn load(config: &Config, language: Language) -> Result<Self> {
        config.require_model(language)?;
        let embeddings = WordEmbeddings::load_word2vec(&config.model_path(language))?;
        let stopwords = stopwords::stopwords_for(&config.stopword_path(language), language)?;
        Ok(Self::new(language, embeddings, stopwords))
    }

    /// Bundle caller-supplied parts. Useful when embeddings come from
    /// somewhere other than a word2vec file on disk.
    pub fn new(
        language: Language,
        embeddings: WordEmbeddings,
        stopwords: HashSet<String>,
    ) -> Self {
        Self {
            language,
            embeddings,
            stopwords,
            preprocessor: language.preprocessor(),
        }
    }

    /// Clean and tokenize one document with this language's rules.
    pub fn preprocess(&self, doc: &str) -> Vec<String> {
        self.preprocessor.preprocess(&self.stopwords, doc)
    }
}
