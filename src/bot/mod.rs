//! Stub opponents.
//!
//! Bots are policies over the controller's read surface: they look at
//! the game and name a cell. `MovePolicy::play_turn` places that stone
//! through the same command a human move goes through, so a bot can never
//! bypass the rules.

pub mod random;

pub use random::RandomBot;

use serde::{Deserialize, Serialize};

use crate::controller::GameController;
use crate::core::{Coordinate, Result};
use crate::rules::GameResult;

/// Bot configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// RNG seed. Same seed and same opponent moves give the same game.
    pub seed: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl BotConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Something that picks moves.
pub trait MovePolicy {
    /// Pick a cell for the current player.
    ///
    /// Returns `None` when no move is legal (game not in progress, or
    /// board full).
    fn choose_move(&mut self, game: &GameController) -> Option<Coordinate>;

    /// Choose a move and place it.
    ///
    /// Returns `Ok(None)` without touching the game if no move is legal;
    /// otherwise returns what `place_stone` returned.
    fn play_turn(&mut self, game: &mut GameController) -> Result<Option<GameResult>> {
        match self.choose_move(game) {
            Some(location) => game.place_stone(location),
            None => Ok(None),
        }
    }
}
