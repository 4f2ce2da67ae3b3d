//! Core value types: coordinates, players, stones, configuration, RNG, errors.
//!
//! Everything here is a small immutable value with structural equality.
//! Board geometry and game state build on these.

pub mod coordinate;
pub mod player;
pub mod stone;
pub mod config;
pub mod rng;
pub mod error;

pub use coordinate::Coordinate;
pub use player::{Player, PlayerMap};
pub use stone::Stone;
pub use config::GameConfig;
pub use rng::GameRng;
pub use error::{GameError, IllegalMoveReason, ParseCoordinateError, Result};
