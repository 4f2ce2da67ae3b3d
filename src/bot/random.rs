//! Uniformly random legal moves.

use crate::controller::GameController;
use crate::core::{Coordinate, GameRng};

use super::{BotConfig, MovePolicy};

/// Picks a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(config: &BotConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
        }
    }

    /// Build from an existing RNG stream, e.g. a fork of a match RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomBot {
    fn choose_move(&mut self, game: &GameController) -> Option<Coordinate> {
        let moves = game.legal_moves();
        let choice = self.rng.choose(&moves).copied();
        tracing::trace!(legal = moves.len(), ?choice, "random bot chose");
        choice
    }
}
