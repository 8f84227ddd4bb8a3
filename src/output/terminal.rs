// Colored terminal output for scored pairs and token lists.
//
// This module handles all terminal-specific formatting: colors and
// layout. The main.rs display paths delegate here.

use colored::Colorize;

use super::truncate_chars;
use crate::scoring::ScoredPair;

/// Display scored pairs with the similarity formatted to four decimals.
pub fn display_scored_pairs(pairs: &[ScoredPair]) {
    if pairs.is_empty() {
        println!("No document pairs to score.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Similarity ({} pairs) ===", pairs.len()).bold()
    );
    println!();

    for (i, pair) in pairs.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, truncate_chars(&pair.doc1, 72));
        println!("       {}", truncate_chars(&pair.doc2, 72).dimmed());
        println!("       Similarity: {}", colorize_similarity(pair.similarity));
        println!();
    }
}

/// Display the cleaned token list for one document.
pub fn display_tokens(tokens: &[String]) {
    if tokens.is_empty() {
        println!("{}", "No tokens survived preprocessing.".yellow());
        return;
    }
    println!("{} tokens:", tokens.len());
    for token in tokens {
        println!("  {token}");
    }
}

/// Color a similarity by tier: green for close pairs, yellow for
/// middling ones, blue for distant ones.
fn colorize_similarity(similarity: f64) -> String {
    let text = format!("{similarity:.4}");
    if similarity >= 0.7 {
        text.bright_green().to_string()
    } else if similarity >= 0.4 {
        text.bright_yellow().to_string()
    } else {
        text.bright_blue().to_string()
    }
}
