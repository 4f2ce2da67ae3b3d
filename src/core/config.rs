//! Game configuration.
//!
//! A `GameConfig` fixes the board-size domain a controller accepts:
//! - `default_board_size`: the board a fresh controller starts with
//! - `max_board_size`: the largest size `set_board_size` will accept
//!
//! The hard upper limit is [`Board::MAX_SIZE`]; configurations may only
//! narrow it.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::board::Board;

/// Controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size used until `set_board_size` is called.
    pub default_board_size: u16,

    /// Largest board size accepted by `set_board_size`.
    pub max_board_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_board_size: Board::DEFAULT_SIZE,
            max_board_size: Board::MAX_SIZE,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default board size.
    #[must_use]
    pub fn with_default_board_size(mut self, size: u16) -> Self {
        self.default_board_size = size;
        self
    }

    /// Set the largest accepted board size.
    #[must_use]
    pub fn with_max_board_size(mut self, size: u16) -> Self {
        self.max_board_size = size;
        self
    }

    /// Check that `size` is a board size this configuration accepts.
    pub fn check_board_size(&self, size: u16) -> Result<()> {
        if size < Board::MIN_SIZE || size > self.max_board_size {
            return Err(GameError::InvalidSize {
                size,
                min: Board::MIN_SIZE,
                max: self.max_board_size,
            });
        }
        Ok(())
    }

    /// Validate the configuration as a whole.
    pub fn validate(&self) -> Result<()> {
        if self.max_board_size < Board::MIN_SIZE || self.max_board_size > Board::MAX_SIZE {
            return Err(GameError::InvalidSize {
                size: self.max_board_size,
                min: Board::MIN_SIZE,
                max: Board::MAX_SIZE,
            });
        }
        self.check_board_size(self.default_board_size)
    }
}
