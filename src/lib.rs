//! Wordle Game
//!
//! A Wordle-style guessing game: guess a secret word of fixed length within a
//! limited number of attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Game, GameConfig};
//! use wordle_game::wordlists::Dictionary;
//!
//! let mut game = Game::with_secret(GameConfig::default(), Dictionary::embedded(), "buffer")?;
//!
//! let outcome = game.submit_guess("anchor")?;
//! if let Some(result) = &outcome.result {
//!     println!("{} ({} attempts left)", result.to_emoji(), game.attempts_remaining());
//! }
//! # Ok::<(), wordle_game::game::GameError>(())
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
