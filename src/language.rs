// The closed set of supported languages.
//
// Everything language-specific hangs off this enum: conventional model
// and stopword file names, the built-in stopword list, and the
// preprocessor. Callers resolve a variant once (usually from a "cn" /
// "en" tag) and never branch on strings afterwards.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::preprocess::chinese::ChinesePreprocessor;
use crate::preprocess::english::EnglishPreprocessor;
use crate::preprocess::traits::Preprocessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Chinese,
    English,
}

impl Language {
    /// The short tag used in the public contract ("cn" / "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "cn",
            Language::English => "en",
        }
    }

    /// Conventional file name of the pretrained word2vec binary for
    /// this language, resolved relative to the configured model dir.
    pub fn model_filename(&self) -> &'static str {
        match self {
            Language::Chinese => "cn.cbow.bin",
            Language::English => "GoogleNews-vectors-negative300.bin",
        }
    }

    /// Conventional file name of the stopword list for this language,
    /// resolved relative to the configured data dir.
    pub fn stopword_filename(&self) -> &'static str {
        match self {
            Language::Chinese => "chinese_stopwords.txt",
            Language::English => "english_stopwords.txt",
        }
    }

    /// Build the preprocessor for this language.
    ///
    /// Construction is not free (the Chinese preprocessor loads the
    /// segmenter dictionary), so callers hold on to the result rather
    /// than rebuilding it per document.
    pub fn preprocessor(&self) -> Box<dyn Preprocessor> {
        match self {
            Language::Chinese => Box::new(ChinesePreprocessor::new()),
            Language::English => Box::new(EnglishPreprocessor::new()),
        }
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    /// Accepts exactly the tags from the public contract. Anything
    /// else — including "zh", "EN", or empty — is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cn" => Ok(Language::Chinese),
            "en" => Ok(Language::English),
            other => Err(ValidationError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_tags() {
        assert_eq!("cn".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn rejects_unknown_tags() {
        for tag in ["fr", "zh", "EN", "", "english"] {
            let err = tag.parse::<Language>().unwrap_err();
            assert_eq!(
                err,
                ValidationError::UnsupportedLanguage(tag.to_string()),
                "tag {tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_through_code() {
        for lang in [Language::Chinese, Language::English] {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }
}
