//! Formatting utilities for terminal output

use crate::core::{GuessResult, Verdict};
use colored::{ColoredString, Colorize};

/// A single letter as a coloured tile, e.g. ` B ` on green
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A whole scored guess as a row of coloured tiles
#[must_use]
pub fn result_tiles(result: &GuessResult) -> String {
    result
        .letters()
        .iter()
        .map(|&(letter, verdict)| letter_tile(letter, verdict).to_string())
        .collect()
}

/// Share-style grid of emoji rows, one per guess
#[must_use]
pub fn history_emoji(history: &[GuessResult]) -> String {
    history
        .iter()
        .map(GuessResult::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pluralize "guess"
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
