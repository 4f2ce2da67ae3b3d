//! Ring detection.
//!
//! Any three mutually adjacent stones form a cycle in the adjacency
//! graph, so plain cycle detection would report rings everywhere. A real
//! ring has to wind around at least one cell, and on a hex grid that is
//! exactly a closed walk that never makes a sharp turn.
//!
//! ## The walk
//!
//! State is `(previous, current)`. From `current`, a candidate `next`
//! must be:
//! - a member of the group,
//! - not `previous`,
//! - not adjacent to `previous` (a sharp turn, cutting the corner of a
//!   triangle),
//! - not already on the current path.
//!
//! The origin is never marked visited; reaching it again closes the
//! ring. With only straight steps and 60-degree turns allowed, a closed
//! walk needs at least six steps and always encloses a cell.
//!
//! ## Pruning
//!
//! Every ring through the origin leaves it toward one group neighbor and
//! returns through another. The walk is started from each neighbor in
//! turn, with two cuts:
//! - a start whose walk failed is never a closing neighbor again, since
//!   any ring through it would have been found from it;
//! - a step is only taken if the cell can still reach one of the
//!   remaining closing neighbors without crossing the path or the origin.
//!
//! Neither cut discards a walk that could close, so the answer is the
//! same as the exhaustive search. A two-wide strip of a hundred stones
//! takes a couple of hundred steps instead of an exponential number.

use rustc_hash::FxHashSet;

use crate::board::{Board, Neighbors};
use crate::core::Coordinate;

/// One step of the walk: where we are and which continuations remain.
struct Step {
    current: Coordinate,
    candidates: Neighbors,
    cursor: usize,
}

impl Step {
    fn new(
        board: &Board,
        is_member: &impl Fn(Coordinate) -> bool,
        previous: Coordinate,
        current: Coordinate,
    ) -> Self {
        let candidates = board
            .neighbors(current)
            .into_iter()
            .filter(|&next| {
                next != previous && is_member(next) && !board.are_adjacent(next, previous)
            })
            .collect();
        Self {
            current,
            candidates,
            cursor: 0,
        }
    }
}

/// Check whether a ring passes through `origin`.
///
/// `is_member` defines the group; `origin` must satisfy it.
pub(crate) fn has_ring_through(
    board: &Board,
    is_member: impl Fn(Coordinate) -> bool,
    origin: Coordinate,
) -> bool {
    let starts: Neighbors = board
        .neighbors(origin)
        .into_iter()
        .filter(|&cell| is_member(cell))
        .collect();
    let mut closers = starts.clone();

    for &start in &starts {
        closers.retain(|cell| *cell != start);
        if closers.is_empty() {
            break;
        }
        if walk_from(board, &is_member, origin, start, &closers) {
            return true;
        }
    }

    false
}

/// Depth-first walk leaving `origin` through `start`.
fn walk_from(
    board: &Board,
    is_member: &impl Fn(Coordinate) -> bool,
    origin: Coordinate,
    start: Coordinate,
    closers: &[Coordinate],
) -> bool {
    let mut on_path: FxHashSet<Coordinate> = FxHashSet::default();
    on_path.insert(start);
    let mut path = vec![Step::new(board, is_member, origin, start)];

    while let Some(step) = path.last_mut() {
        let Some(&next) = step.candidates.get(step.cursor) else {
            on_path.remove(&step.current);
            path.pop();
            continue;
        };
        step.cursor += 1;
        let current = step.current;

        if next == origin {
            tracing::trace!(%origin, via = %start, length = path.len() + 1, "ring closed");
            return true;
        }
        if !on_path.insert(next) {
            continue;
        }
        if !reaches_closer(board, is_member, origin, next, &on_path, closers) {
            on_path.remove(&next);
            continue;
        }
        path.push(Step::new(board, is_member, current, next));
    }

    false
}

/// Flood fill from `from` through members off the path, stopping at the
/// first closing neighbor.
fn reaches_closer(
    board: &Board,
    is_member: &impl Fn(Coordinate) -> bool,
    origin: Coordinate,
    from: Coordinate,
    on_path: &FxHashSet<Coordinate>,
    closers: &[Coordinate],
) -> bool {
    if closers.contains(&from) {
        return true;
    }

    let mut seen: FxHashSet<Coordinate> = FxHashSet::default();
    seen.insert(from);
    let mut frontier = vec![from];

    while let Some(cell) = frontier.pop() {
        for next in board.neighbors(cell) {
            if next == origin || !is_member(next) || on_path.contains(&next) || !seen.insert(next) {
                continue;
            }
            if closers.contains(&next) {
                return true;
            }
            frontier.push(next);
        }
    }

    false
}
