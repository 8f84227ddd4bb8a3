use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;

use wordmover::config::Config;
use wordmover::language::Language;
use wordmover::output::terminal;
use wordmover::resources::LanguageResources;
use wordmover::scoring::{self, ScoredPair};
use wordmover::similarity::wmd::WmdScorer;
use wordmover::stopwords;

/// Wordmover: Word Mover's Distance similarity for paired documents.
///
/// Scores how semantically close docs1[i] and docs2[i] are, using
/// pretrained word2vec embeddings for Chinese or English text.
#[derive(Parser)]
#[command(name = "wordmover", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score paired documents from two files (one document per line)
    Compare {
        /// File holding the first document of each pair
        docs1: PathBuf,

        /// File holding the second document of each pair
        docs2: PathBuf,

        /// Text language: "cn" or "en"
        #[arg(long)]
        lang: String,

        /// Emit scored pairs as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score the built-in demo pairs
    Example {
        /// Restrict the demo to one language ("cn" or "en"; default both)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show the cleaned token list for one document (no model needed)
    Tokens {
        /// Text language: "cn" or "en"
        #[arg(long)]
        lang: String,

        /// The document text
        text: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordmover=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            docs1,
            docs2,
            lang,
            json,
        } => {
            let language: Language = lang.parse()?;
            let config = Config::load()?;

            let docs1 = read_documents(&docs1)?;
            let docs2 = read_documents(&docs2)?;
            // Reject malformed requests before paying the model load.
            scoring::validate(&docs1, &docs2)?;

            let resources = load_resources(&config, language)?;
            let scores = scoring::score_pairs(&resources, &WmdScorer::default(), &docs1, &docs2)?;

            let pairs: Vec<ScoredPair> = docs1
                .into_iter()
                .zip(docs2)
                .zip(scores)
                .map(|((doc1, doc2), similarity)| ScoredPair {
                    doc1,
                    doc2,
                    similarity,
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&pairs)?);
            } else {
                terminal::display_scored_pairs(&pairs);
            }
        }

        Commands::Example { lang } => {
            let config = Config::load()?;
            let languages = match lang {
                Some(tag) => vec![tag.parse()?],
                None => vec![Language::English, Language::Chinese],
            };
            for language in languages {
                run_example(&config, language)?;
            }
        }

        Commands::Tokens { lang, text } => {
            let language: Language = lang.parse()?;
            let config = Config::load()?;

            let stopwords = stopwords::stopwords_for(&config.stopword_path(language), language)?;
            let tokens = language.preprocessor().preprocess(&stopwords, &text);
            terminal::display_tokens(&tokens);
        }
    }

    Ok(())
}

/// Read one document per line, trimming and skipping blank lines.
fn read_documents(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read documents from {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Load language resources with a spinner — the English reference
/// model is several gigabytes, so the read takes a while.
fn load_resources(config: &Config, language: Language) -> Result<LanguageResources> {
    config.require_model(language)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Loading word2vec model ({language})..."));
    spinner.enable_steady_tick(Duration::from_millis(120));
    let resources = LanguageResources::load(config, language);
    spinner.finish_and_clear();
    resources
}

/// Score the demo pairs for one language and print them.
fn run_example(config: &Config, language: Language) -> Result<()> {
    let (docs1, docs2) = example_pairs(language);

    let title = match language {
        Language::English => "English example",
        Language::Chinese => "Chinese example",
    };
    println!("\n{}", format!("=== {title} ===").bold());

    let resources = load_resources(config, language)?;
    let scores = scoring::score_pairs(&resources, &WmdScorer::default(), &docs1, &docs2)?;

    let pairs: Vec<ScoredPair> = docs1
        .into_iter()
        .zip(docs2)
        .zip(scores)
        .map(|((doc1, doc2), similarity)| ScoredPair {
            doc1,
            doc2,
            similarity,
        })
        .collect();
    terminal::display_scored_pairs(&pairs);
    Ok(())
}

/// The built-in demo pairs.
fn example_pairs(language: Language) -> (Vec<String>, Vec<String>) {
    let (docs1, docs2): (Vec<&str>, Vec<&str>) = match language {
        Language::English => (
            vec![
                "a speaker presents some products",
                "vegetable is being sliced.",
                "man sitting using tool at a table in his home.",
            ],
            vec![
                "the speaker is introducing the new products on a fair.",
                "someone is slicing a tomato with a knife on a cutting board.",
                "The president comes to China",
            ],
        ),
        Language::Chinese => (
            vec!["做任何事都不能三天打鱼，两天晒网", "学无止境", "他整天愁眉苦脸"],
            vec!["对待每件事都不能轻言放弃", "学海无涯，天道酬勤", "他和朋友去逛街"],
        ),
    };
    (
        docs1.into_iter().map(str::to_string).collect(),
        docs2.into_iter().map(str::to_string).collect(),
    )
}
