//! # havannah
//!
//! Rules engine for Havannah, the two-player connection game on a
//! hexagonal board of hexagonal cells.
//!
//! ## Rules
//!
//! Players alternate placing one stone on any empty cell, `Player::One`
//! first. Stones never move. A player wins by forming a connected group
//! that is a **bridge** (two corners), a **fork** (three sides) or a
//! **ring** (a loop around at least one cell). A full board with no
//! winning group is a draw.
//!
//! ## Architecture
//!
//! - **Immutable geometry**: `Board` answers neighbor, corner and side
//!   questions and never changes once built.
//! - **Incremental groups**: each placement merges the new stone into its
//!   adjacent same-owner groups and updates corner and side aggregates, so
//!   bridge and fork checks never rescan the board.
//! - **Single owner of state**: `GameController` holds everything mutable;
//!   collaborators read it, subscribe to events, or take `im`-backed
//!   snapshots.
//!
//! ```
//! use havannah::{Coordinate, GameController, GameState};
//!
//! let mut game = GameController::new();
//! game.set_board_size(5)?;
//! game.start_game()?;
//!
//! let e5: Coordinate = "e5".parse()?;
//! assert!(game.can_place_stone(e5));
//! assert_eq!(game.place_stone(e5)?, None);
//! assert!(!game.can_place_stone(e5));
//! assert_eq!(game.state(), GameState::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: coordinates, players, stones, configuration, RNG, errors
//! - `board`: board geometry, corners and named sides
//! - `groups`: stone groups and ring detection
//! - `rules`: win conditions and game results
//! - `controller`: lifecycle, placement, events and snapshots
//! - `bot`: stub move policies

pub mod core;
pub mod board;
pub mod groups;
pub mod rules;
pub mod controller;
pub mod bot;

// Re-export commonly used types
pub use crate::core::{
    Coordinate, Player, PlayerMap, Stone,
    GameConfig, GameRng,
    GameError, IllegalMoveReason, ParseCoordinateError, Result,
};

pub use crate::board::{Board, BoardSide, CellKind, SideSet};

pub use crate::groups::{GroupId, StoneGroup};

pub use crate::rules::{detect_win, GameResult, Victory, WinCondition};

pub use crate::controller::{GameController, GameEvent, GameSnapshot, GameState, ListenerId};

pub use crate::bot::{BotConfig, MovePolicy, RandomBot};
