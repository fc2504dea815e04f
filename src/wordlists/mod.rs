//! Word lists for the game
//!
//! [`WordSource`] is the narrow contract the game engine needs: draw a secret
//! word and answer length and membership queries. [`Dictionary`] implements it
//! over word list files with embedded fallbacks.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, Partition};
pub use embedded::{FIVE, SEVEN, SIX, fallback};

use std::fmt;

/// Error type for word sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    /// The dictionary partition for this length is empty
    NoWordsAvailable { length: usize },
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable { length } => {
                write!(f, "No words available with {length} letters")
            }
        }
    }
}

impl std::error::Error for WordSourceError {}

/// Supplier of secret words and dictionary lookups
pub trait WordSource {
    /// Pick a secret word with `length` characters
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::NoWordsAvailable` when no word of that length
    /// is known.
    fn random_word(&mut self, length: usize) -> Result<String, WordSourceError>;

    /// True when `word` has exactly `length` characters
    fn is_correct_length(&self, word: &str, length: usize) -> bool {
        word.chars().count() == length
    }

    /// True when the lower-cased `word` is in the dictionary for `length`
    fn is_known_word(&mut self, word: &str, length: usize) -> bool;
}
