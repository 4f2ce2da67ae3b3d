//! Game orchestration.
//!
//! - `game`: `GameController`, the single owner of mutable game state
//! - `events`: observer notifications fired after each command
//! - `snapshot`: cheap frozen copies for polling collaborators

pub mod events;
pub mod game;
pub mod snapshot;

pub use events::{GameEvent, Listener, ListenerId};
pub use game::{GameController, GameState};
pub use snapshot::GameSnapshot;
