//! Game error types

use crate::wordlists::WordSourceError;
use std::fmt;

/// Errors raised by [`Game`](super::Game)
///
/// Rejected guesses are never errors, they are reported through
/// [`GuessOutcome`](super::GuessOutcome). Only construction problems and
/// guesses made after the game ended surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Word length or attempt budget is zero
    InvalidConfig(&'static str),
    /// The word source has nothing of the requested length
    NoWords(WordSourceError),
    /// A fixed secret does not have the configured length
    SecretLength { expected: usize, actual: usize },
    /// The game is already won or lost
    Finished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(reason) => write!(f, "Invalid game configuration: {reason}"),
            Self::NoWords(err) => write!(f, "Cannot start game: {err}"),
            Self::SecretLength { expected, actual } => {
                write!(f, "Secret word must have {expected} letters, got {actual}")
            }
            Self::Finished => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoWords(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordSourceError> for GameError {
    fn from(err: WordSourceError) -> Self {
        Self::NoWords(err)
    }
}
