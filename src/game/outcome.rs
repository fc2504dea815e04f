//! Result of submitting a guess

use crate::core::GuessResult;

/// Everything a front end needs to react to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Scored letters, present only when the guess consumed an attempt
    pub result: Option<GuessResult>,
    /// Guess had the configured number of characters
    pub length_valid: bool,
    /// Guess is in the dictionary for the configured length
    pub known: bool,
    /// Every letter was correct
    pub is_winner: bool,
}

/// Coarse classification of a [`GuessOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Not text, or the wrong number of characters; no attempt consumed
    WrongLength,
    /// Not in the dictionary; no attempt consumed
    UnknownWord,
    /// Scored and an attempt consumed
    Scored,
    /// Scored and every letter correct
    Won,
}

impl GuessOutcome {
    pub(crate) const fn malformed() -> Self {
        Self {
            result: None,
            length_valid: false,
            known: false,
            is_winner: false,
        }
    }

    pub(crate) const fn unknown_word() -> Self {
        Self {
            result: None,
            length_valid: true,
            known: false,
            is_winner: false,
        }
    }

    pub(crate) fn scored(result: GuessResult) -> Self {
        let is_winner = result.is_winner();
        Self {
            result: Some(result),
            length_valid: true,
            known: true,
            is_winner,
        }
    }

    /// True when the guess cost an attempt
    #[must_use]
    pub const fn consumed_attempt(&self) -> bool {
        self.result.is_some()
    }

    /// Classify the outcome
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        if !self.length_valid {
            OutcomeKind::WrongLength
        } else if !self.known {
            OutcomeKind::UnknownWord
        } else if self.is_winner {
            OutcomeKind::Won
        } else {
            OutcomeKind::Scored
        }
    }
}
