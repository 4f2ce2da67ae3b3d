//! Shared helpers for integration tests.

#![allow(dead_code)]

use havannah::{Coordinate, GameController, GameResult};

/// Install a test-friendly subscriber once. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn cell(name: &str) -> Coordinate {
    name.parse().expect("valid cell name")
}

/// A controller on a board of `size`, already started.
pub fn started_game(size: u16) -> GameController {
    init_tracing();
    let mut game = GameController::new();
    game.set_board_size(size).expect("valid size");
    game.start_game().expect("fresh controller starts");
    game
}

/// Play `moves` in order, asserting none but the last ends the game.
///
/// Returns what the last placement returned.
pub fn play(game: &mut GameController, moves: &[&str]) -> Option<GameResult> {
    let mut last = None;
    for (i, name) in moves.iter().enumerate() {
        last = game.place_stone(cell(name)).expect("legal move");
        if i + 1 < moves.len() {
            assert!(last.is_none(), "game ended early at move {} ({name})", i + 1);
        }
    }
    last
}

pub const BRIDGE_SIZE_5: &[&str] = &["a1", "c5", "b2", "e7", "c2", "g7", "d2", "h6", "e2", "f4", "e1"];

pub const FORK_SIZE_4: &[&str] = &[
    "d2", "f4", "d3", "b2", "d4", "e6", "c4", "b4", "c5", "e4", "c1", "f6", "e2", "b3", "c6",
];

pub const RING_SIZE_5: &[&str] = &[
    "c2", "b3", "g4", "f6", "c6", "e6", "g7", "d5", "h6", "d4", "b5", "e4", "b4", "f5",
];

/// Same opening as the ring, but Two's 14th stone fills the middle
/// instead of closing the loop.
pub const NEAR_RING_SIZE_5: &[&str] = &[
    "c2", "b3", "g4", "f6", "c6", "e6", "g7", "d5", "h6", "d4", "b5", "e4", "b4", "e5",
];

/// Fills a size 3 board with no winning group.
pub const DRAW_SIZE_3: &[&str] = &[
    "a1", "b1", "b2", "c1", "c2", "a2", "d2", "b3", "a3", "c3", "d3", "e3", "b4", "d4", "c4", "c5",
    "e4", "e5", "d5",
];

/// Fills a size 4 board with no winning group.
pub const DRAW_SIZE_4: &[&str] = &[
    "a1", "b1", "d1", "c1", "b2", "a2", "c2", "d2", "a3", "e2", "c3", "b3", "d3", "e3", "f3", "c4",
    "a4", "f4", "b4", "g4", "d4", "c5", "e4", "d5", "b5", "e5", "f5", "c6", "g5", "d6", "f6", "e6",
    "g6", "d7", "e7", "g7", "f7",
];
