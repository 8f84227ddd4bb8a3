// Chinese preprocessing: strip everything outside the core Han block,
// drop the diminutive suffix 儿, segment with jieba, remove stopwords.
//
// Because the non-Han strip runs first, the segmenter always sees a
// pure-Chinese residual string with no whitespace or punctuation.

use std::collections::HashSet;

use jieba_rs::Jieba;
use regex::Regex;

use super::traits::Preprocessor;

pub struct ChinesePreprocessor {
    jieba: Jieba,
    non_han_re: Regex,
}

impl ChinesePreprocessor {
    /// Builds the segmenter with its bundled dictionary. This is the
    /// slow part of construction, so resources hold one instance.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            non_han_re: Regex::new(r"[^\x{4E00}-\x{9FFF}]").expect("valid regex"),
        }
    }
}

impl Default for ChinesePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for ChinesePreprocessor {
    fn preprocess(&self, stopwords: &HashSet<String>, doc: &str) -> Vec<String> {
        let cleaned = self.non_han_re.replace_all(doc, "");
        // 儿 sits inside the Han block, so it needs its own pass.
        let cleaned = cleaned.replace('儿', "");
        self.jieba
            .cut(&cleaned, true)
            .into_iter()
            .map(|word| word.to_string())
            .filter(|token| !token.is_empty() && !stopwords.contains(token))
            .collect()
    }
}
