//! Core domain types for the game
//!
//! Pure scoring types with no I/O: per-letter verdicts and scored guesses.

mod feedback;
mod verdict;

pub use feedback::GuessResult;
pub use verdict::Verdict;

/// Normalize raw player input: trim surrounding whitespace and lower-case
///
/// # Examples
/// ```
/// use wordle_game::core::normalize;
///
/// assert_eq!(normalize("  BuFfEr \n"), "buffer");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
