// Stopword lists — a per-language file by convention, with the
// stop-words corpus as a built-in fallback so the pipeline works on a
// machine with no data directory set up.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

use crate::language::Language;

/// Load a stopword file: UTF-8, one word per line, trimmed. Blank
/// lines are skipped.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read stopword file: {}", path.display()))?;
    let words: HashSet<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!(words = words.len(), path = %path.display(), "Loaded stopword file");
    Ok(words)
}

/// The built-in stopword list for a language.
pub fn builtin_stopwords(language: Language) -> HashSet<String> {
    let lang = match language {
        Language::Chinese => LANGUAGE::Chinese,
        Language::English => LANGUAGE::English,
    };
    get(lang).into_iter().collect()
}

/// Resolve the stopword set: the file at `path` when present,
/// otherwise the built-in list for the language.
pub fn stopwords_for(path: &Path, language: Language) -> Result<HashSet<String>> {
    if path.exists() {
        load_stopwords(path)
    } else {
        info!(language = %language, "Stopword file not found, using built-in list");
        Ok(builtin_stopwords(language))
    }
}
