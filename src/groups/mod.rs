//! Connected stone groups and the queries the win conditions need.
//!
//! - `stone_group`: `StoneGroup` with incremental corner and side tracking
//! - `ring`: the sharp-turn-free walk behind `StoneGroup::has_ring_through`

pub mod ring;
pub mod stone_group;

pub use stone_group::{GroupId, StoneGroup};
