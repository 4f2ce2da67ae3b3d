//! Polling view of the game.
//!
//! A snapshot is a frozen copy of everything a collaborator renders:
//! board, lifecycle state, whose turn it is, the result and every stone.
//! The stone table is an `im::Vector` shared with the controller, so
//! taking a snapshot after every move costs O(1) regardless of board size.

use crate::board::Board;
use crate::core::{Coordinate, Player, Stone};
use crate::rules::GameResult;

use super::game::GameState;

/// Immutable copy of the observable game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    board: Board,
    state: GameState,
    current_player: Player,
    result: Option<GameResult>,
    cells: im::Vector<Option<Stone>>,
}

impl GameSnapshot {
    pub(crate) fn new(
        board: Board,
        state: GameState,
        current_player: Player,
        result: Option<GameResult>,
        cells: im::Vector<Option<Stone>>,
    ) -> Self {
        Self {
            board,
            state,
            current_player,
            result,
            cells,
        }
    }

    /// Board the snapshot was taken on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle state at the time of the snapshot.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Player to move next; the loser once a game is won.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The final result, if the game was completed.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// The winner, if the game ended with a winning group.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.as_ref().and_then(GameResult::winner)
    }

    /// The stone on a cell at the time of the snapshot.
    #[must_use]
    pub fn stone_at(&self, location: Coordinate) -> Option<Stone> {
        let index = self.board.index_of(location)?;
        self.cells.get(index).copied().flatten()
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// All stones, in `Board::coordinates()` order.
    pub fn stones(&self) -> impl Iterator<Item = &Stone> {
        self.cells.iter().flatten()
    }
}
