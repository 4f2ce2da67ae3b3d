//! Win conditions and game outcomes.
//!
//! A group wins by any of three shapes:
//! - **Bridge**: touches at least two corners
//! - **Fork**: touches at least three named sides
//! - **Ring**: contains a cycle around at least one cell
//!
//! Only the group containing the stone just placed can have changed, so
//! only that group is evaluated.

pub mod outcome;

pub use outcome::{detect_win, GameResult, Victory, WinCondition};
pub(crate) use outcome::evaluate_group;
