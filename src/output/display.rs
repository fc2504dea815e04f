//! Display functions for command results

use super::formatters::result_tiles;
use crate::core::{GuessResult, Verdict};
use colored::Colorize;

/// Print the result of scoring one guess against a known secret
pub fn print_score_result(result: &GuessResult, secret: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Scoring {} against {}",
        result.word().to_uppercase().bright_white().bold(),
        secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", result_tiles(result));
    println!("  {}\n", result.to_emoji());

    for (letter, verdict) in result.letters() {
        println!("  {letter} -> {verdict}");
    }

    println!();
    println!(
        "  Correct: {}  Present: {}  Absent: {}",
        result.count(Verdict::Correct).to_string().green().bold(),
        result.count(Verdict::Present).to_string().yellow().bold(),
        result.count(Verdict::Absent).to_string().bright_black()
    );

    if result.is_winner() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}
