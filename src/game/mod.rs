//! Game state machine
//!
//! A [`Game`] owns the secret word, the attempt budget and the history of
//! scored guesses. Front ends drive it through [`Game::submit_guess`] and react
//! to the returned [`GuessOutcome`].

mod config;
mod engine;
mod error;
mod outcome;

pub use config::GameConfig;
pub use engine::{Game, GameStatus};
pub use error::GameError;
pub use outcome::{GuessOutcome, OutcomeKind};
