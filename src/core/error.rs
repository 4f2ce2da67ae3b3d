//! Error types for the engine.
//!
//! Every command on the engine is synchronous and either succeeds or
//! returns one of these errors without touching any state. There are no
//! transient failures: nothing here is worth retrying.

use thiserror::Error;

use super::coordinate::Coordinate;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The game has not started or is already over.
    NotInProgress,
    /// A stone already occupies the cell.
    Occupied,
    /// The coordinate does not lie on the current board.
    OffBoard,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::NotInProgress => write!(f, "game is not in progress"),
            IllegalMoveReason::Occupied => write!(f, "cell is occupied"),
            IllegalMoveReason::OffBoard => write!(f, "cell is not on the board"),
        }
    }
}

/// Errors raised by the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board size outside the supported range.
    #[error("board size {size} is outside the supported range {min}..={max}")]
    InvalidSize {
        /// The rejected size.
        size: u16,
        /// Smallest supported size.
        min: u16,
        /// Largest supported size.
        max: u16,
    },

    /// Command issued in a lifecycle state that forbids it.
    #[error("cannot {operation} while the game is {state}")]
    InvalidState {
        /// The refused command.
        operation: &'static str,
        /// The state the controller was in.
        state: crate::controller::GameState,
    },

    /// `place_stone` called when `can_place_stone` is false.
    #[error("illegal move at {location}: {reason}")]
    IllegalMove {
        /// Where the stone was to be placed.
        location: Coordinate,
        /// Why it was refused.
        reason: IllegalMoveReason,
    },

    /// A stone was queried against a group it does not belong to.
    ///
    /// This signals a broken engine invariant, never a user mistake.
    #[error("stone at {location} is not a member of this group")]
    GroupMembership {
        /// Location of the foreign stone.
        location: Coordinate,
    },
}

/// Failure to parse a cell name such as `e4`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid cell name {input:?}: expected a file label followed by a rank, e.g. \"e4\"")]
pub struct ParseCoordinateError {
    /// The text that failed to parse.
    pub input: String,
}
