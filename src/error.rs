// Typed validation errors for the scoring entry points.
//
// Validation runs before any resource loading, so these are the only
// errors a caller can match on structurally. Everything downstream
// (I/O, malformed model files) propagates as anyhow errors with
// context attached.

use thiserror::Error;

/// Why a scoring request was rejected before any work happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The two document lists have different lengths. Reported for any
    /// unequal pair, including one empty list against a non-empty one.
    #[error("document lists have mismatched lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Both document lists are empty — there is nothing to score.
    #[error("document lists are empty")]
    EmptyInput,

    /// The language tag is outside the supported set.
    #[error("unsupported language tag {0:?} (expected \"cn\" or \"en\")")]
    UnsupportedLanguage(String),
}
