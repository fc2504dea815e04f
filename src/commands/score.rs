//! One-shot scoring command
//!
//! Scores a single guess against a given secret without starting a game.

use crate::core::{GuessResult, normalize};
use anyhow::{Result, bail};

/// Score `guess` against `secret`
///
/// Both words are trimmed and lower-cased first. No dictionary check is made.
///
/// # Errors
///
/// Returns an error if either word is empty or the lengths differ.
pub fn score_guess(secret: &str, guess: &str) -> Result<GuessResult> {
    let secret = normalize(secret);
    let guess = normalize(guess);

    if secret.is_empty() {
        bail!("Secret word must not be empty");
    }

    let (expected, actual) = (secret.chars().count(), guess.chars().count());
    if expected != actual {
        bail!("Guess '{guess}' has {actual} letters, secret has {expected}");
    }

    Ok(GuessResult::calculate(&guess, &secret))
}
