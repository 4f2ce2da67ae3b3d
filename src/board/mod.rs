//! Board geometry: valid cells, adjacency, corners and named sides.
//!
//! The board is immutable once built. Everything that changes during a
//! game lives in the controller; the board only answers geometric
//! questions.

pub mod geometry;
pub mod side;

pub use geometry::{Board, Neighbors, NEIGHBOR_OFFSETS};
pub use side::{BoardSide, CellKind, SideSet};
