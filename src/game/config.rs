//! Game configuration

use super::GameError;

/// Word length and attempt budget for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub length: usize,
    pub max_attempts: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(length: usize, max_attempts: u32) -> Self {
        Self {
            length,
            max_attempts,
        }
    }

    /// Check that both the length and the attempt budget are at least one
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` naming the offending field.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.length == 0 {
            return Err(GameError::InvalidConfig("word length must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig("attempts must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6, 6)
    }
}
