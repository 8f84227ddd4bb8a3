use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::language::Language;

/// Central configuration loaded from environment variables.
///
/// Paths follow a convention: one model file and one stopword file per
/// language, under `model_dir` and `data_dir` respectively. The .env
/// file is loaded automatically at startup via dotenvy. Nothing here
/// is secret — it is all local file locations.
pub struct Config {
    /// Directory holding the pretrained word2vec binaries
    /// (WORDMOVER_MODEL_DIR).
    pub model_dir: PathBuf,
    /// Directory holding the stopword lists (WORDMOVER_DATA_DIR).
    pub data_dir: PathBuf,
    /// Full-path override for the Chinese model (WORDMOVER_CN_MODEL).
    pub cn_model: Option<PathBuf>,
    /// Full-path override for the English model (WORDMOVER_EN_MODEL).
    pub en_model: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default, so loading never fails on a fresh
    /// machine — only `require_model` does, when a model file is
    /// actually needed and missing.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("WORDMOVER_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());
        let data_dir = env::var("WORDMOVER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Ok(Self {
            model_dir,
            data_dir,
            cn_model: env::var("WORDMOVER_CN_MODEL").ok().map(PathBuf::from),
            en_model: env::var("WORDMOVER_EN_MODEL").ok().map(PathBuf::from),
        })
    }

    /// Resolve the word2vec binary path for a language: the explicit
    /// per-language override if set, otherwise the conventional file
    /// name under `model_dir`.
    pub fn model_path(&self, language: Language) -> PathBuf {
        let override_path = match language {
            Language::Chinese => self.cn_model.as_ref(),
            Language::English => self.en_model.as_ref(),
        };
        match override_path {
            Some(p) => p.clone(),
            None => self.model_dir.join(language.model_filename()),
        }
    }

    /// Resolve the stopword file path for a language. The file is
    /// optional — loading falls back to a built-in list when it is
    /// absent.
    pub fn stopword_path(&self, language: Language) -> PathBuf {
        self.data_dir.join(language.stopword_filename())
    }

    /// Check that the model file for a language exists.
    /// Call this before any operation that needs embeddings.
    pub fn require_model(&self, language: Language) -> Result<()> {
        let path = self.model_path(language);
        if !path.exists() {
            anyhow::bail!(
                "Word2vec model for '{}' not found: {}\n\
                 Place a pretrained binary there, or point WORDMOVER_MODEL_DIR\n\
                 (or WORDMOVER_{}_MODEL) at the file. See .env.example.",
                language,
                path.display(),
                language.code().to_uppercase(),
            );
        }
        Ok(())
    }
}

/// Returns the default directory for model files.
/// Uses the platform data directory: ~/.local/share/wordmover/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordmover")
        .join("models")
}

/// Returns the default directory for stopword lists.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordmover")
        .join("data")
}
