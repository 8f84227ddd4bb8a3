// Wordmover: Word Mover's Distance similarity for paired documents.
//
// This is the library root. Each module corresponds to one stage of the
// scoring pipeline: configuration, resource loading, preprocessing,
// pairwise scoring, and terminal output.

pub mod config;
pub mod embedding;
pub mod error;
pub mod language;
pub mod output;
pub mod preprocess;
pub mod resources;
pub mod scoring;
pub mod similarity;
pub mod stopwords;
