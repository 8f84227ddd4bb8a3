// English preprocessing: lowercase, word tokenization, stopword
// removal, and an alphabetic-only filter that drops numbers, mixed
// tokens, and contractions' leftovers.

use std::collections::HashSet;

use regex::Regex;

use super::traits::Preprocessor;

pub struct EnglishPreprocessor {
    word_re: Regex,
}

impl EnglishPreprocessor {
    pub fn new() -> Self {
        Self {
            // Runs of letters/digits/underscore/apostrophe; punctuation
            // and whitespace never enter the token stream.
            word_re: Regex::new(r"[\p{L}\p{N}_']+").expect("valid regex"),
        }
    }
}

impl Default for EnglishPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for EnglishPreprocessor {
    fn preprocess(&self, stopwords: &HashSet<String>, doc: &str) -> Vec<String> {
        let lowered = doc.to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|token| !stopwords.contains(token))
            .filter(|token| token.chars().all(|c| c.is_alphabetic()))
            .collect()
    }
}
