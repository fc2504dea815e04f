//! Game engine: secret word, attempt budget and guess history

use super::{GameConfig, GameError, GuessOutcome};
use crate::core::{GuessResult, normalize};
use crate::wordlists::WordSource;
use log::{debug, info, trace};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single game against one secret word
///
/// Owns its [`WordSource`]; guesses are checked against it for length and
/// membership before they are scored. Only scored guesses consume an attempt.
///
/// # Examples
/// ```
/// use wordle_game::game::{Game, GameConfig, GameStatus};
/// use wordle_game::wordlists::Dictionary;
///
/// let mut game = Game::with_secret(GameConfig::new(6, 6), Dictionary::embedded(), "buffer")?;
///
/// let outcome = game.submit_guess("xx")?;
/// assert!(!outcome.length_valid);
/// assert_eq!(game.attempts_remaining(), 6);
///
/// let outcome = game.submit_guess("BUFFER")?;
/// assert!(outcome.is_winner);
/// assert_eq!(game.status(), GameStatus::Won);
/// # Ok::<(), wordle_game::game::GameError>(())
/// ```
pub struct Game<W: WordSource> {
    words: W,
    config: GameConfig,
    secret: String,
    attempts_remaining: u32,
    history: Vec<GuessResult>,
    status: GameStatus,
}

impl<W: WordSource> Game<W> {
    /// Start a game with a secret drawn from `words`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` for a zero length or attempt budget,
    /// and `GameError::NoWords` if `words` has no word of the configured length.
    pub fn new(config: GameConfig, mut words: W) -> Result<Self, GameError> {
        config.validate()?;
        let secret = words.random_word(config.length)?;
        Ok(Self::start(config, words, secret))
    }

    /// Start a game with a fixed secret
    ///
    /// The secret is trimmed and lower-cased. It does not have to be in the
    /// dictionary, but a guess of it still does.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` for a zero length or attempt budget,
    /// and `GameError::SecretLength` if the secret has the wrong length.
    pub fn with_secret(config: GameConfig, words: W, secret: &str) -> Result<Self, GameError> {
        config.validate()?;
        let secret = normalize(secret);
        let actual = secret.chars().count();
        if actual != config.length {
            return Err(GameError::SecretLength {
                expected: config.length,
                actual,
            });
        }
        Ok(Self::start(config, words, secret))
    }

    fn start(config: GameConfig, words: W, secret: String) -> Self {
        info!(
            "New game: {} letters, {} attempts",
            config.length, config.max_attempts
        );
        Self {
            words,
            config,
            secret,
            attempts_remaining: config.max_attempts,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Validate and score a guess
    ///
    /// Wrong-length and unknown words are reported through the outcome flags
    /// and leave the game untouched. A length-valid, known word is scored,
    /// appended to the history and costs exactly one attempt.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Finished` if the game is already won or lost.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::Finished);
        }

        let word = normalize(input);
        let length = self.config.length;

        if !self.words.is_correct_length(&word, length) {
            trace!("Rejected '{word}': expected {length} letters");
            return Ok(GuessOutcome::malformed());
        }

        if !self.words.is_known_word(&word, length) {
            trace!("Rejected '{word}': not in dictionary");
            return Ok(GuessOutcome::unknown_word());
        }

        let result = GuessResult::calculate(&word, &self.secret);
        self.history.push(result.clone());
        self.attempts_remaining -= 1;
        debug!(
            "Scored '{word}' as {} ({} attempts left)",
            result.to_symbols(),
            self.attempts_remaining
        );

        let outcome = GuessOutcome::scored(result);
        if outcome.is_winner {
            self.status = GameStatus::Won;
            info!("Game won in {} guesses", self.history.len());
        } else if self.attempts_remaining == 0 {
            self.status = GameStatus::Lost;
            info!("Game lost, the word was '{}'", self.secret);
        }

        Ok(outcome)
    }

    /// Validate and score raw input
    ///
    /// Input that is not valid UTF-8 is not text and is rejected with
    /// `length_valid = false` without touching the game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Finished` if the game is already won or lost.
    pub fn submit_bytes(&mut self, input: &[u8]) -> Result<GuessOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::Finished);
        }
        if let Ok(text) = std::str::from_utf8(input) {
            self.submit_guess(text)
        } else {
            trace!("Rejected guess: input is not text");
            Ok(GuessOutcome::malformed())
        }
    }

    /// Throw away the current game and start over with a new secret
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoWords` if the word source can no longer supply a
    /// word; the current game is left as it was.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.secret = self.words.random_word(self.config.length)?;
        self.attempts_remaining = self.config.max_attempts;
        self.history.clear();
        self.status = GameStatus::InProgress;
        info!("Game restarted");
        Ok(())
    }

    /// Scored guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Attempts consumed so far
    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.config.max_attempts - self.attempts_remaining
    }

    /// The secret word, for the end-of-game reveal
    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.config.length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    /// The word source backing this game
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }
}
