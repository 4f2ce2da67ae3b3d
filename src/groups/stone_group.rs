//! Stone groups: maximal connected sets of one player's stones.
//!
//! Groups only ever grow. A placement either starts a new group, extends
//! one, or merges several into one; stones are never removed, so a group
//! never splits. Each group carries the aggregates the win conditions
//! need (corner count and touched sides) so bridge and fork checks are
//! O(1) per placement.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ring;
use crate::board::{Board, SideSet};
use crate::core::{Coordinate, GameError, Player, Result, Stone};

/// Identifier of a live group inside a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl GroupId {
    /// Create a new group ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// A connected component of same-owner stones.
///
/// The group trusts its caller: `add_stone` does not check ownership or
/// adjacency. The controller guarantees both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoneGroup {
    owner: Player,
    stones: FxHashMap<Coordinate, Stone>,
    corner_count: usize,
    sides_touched: SideSet,
}

impl StoneGroup {
    /// Create an empty group for `owner`.
    #[must_use]
    pub fn new(owner: Player) -> Self {
        Self {
            owner,
            stones: FxHashMap::default(),
            corner_count: 0,
            sides_touched: SideSet::empty(),
        }
    }

    /// Player owning every stone in the group.
    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Number of stones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// True if the group has no stones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Number of board corners occupied by the group.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corner_count
    }

    /// Named sides the group touches.
    #[must_use]
    pub fn sides_touched(&self) -> SideSet {
        self.sides_touched
    }

    /// Check whether the group occupies a cell.
    #[must_use]
    pub fn contains(&self, location: Coordinate) -> bool {
        self.stones.contains_key(&location)
    }

    /// Check whether this exact stone (owner and location) is a member.
    #[must_use]
    pub fn contains_stone(&self, stone: &Stone) -> bool {
        self.stones.get(&stone.location) == Some(stone)
    }

    /// Stone at a cell, if it belongs to this group.
    #[must_use]
    pub fn get(&self, location: Coordinate) -> Option<&Stone> {
        self.stones.get(&location)
    }

    /// Iterate over the stones (unordered).
    pub fn stones(&self) -> impl Iterator<Item = &Stone> {
        self.stones.values()
    }

    /// Stone locations in ascending `(file, rank)` order.
    #[must_use]
    pub fn locations(&self) -> Vec<Coordinate> {
        let mut locations: Vec<_> = self.stones.keys().copied().collect();
        locations.sort_unstable();
        locations
    }

    /// Add a stone and update the corner and side aggregates.
    ///
    /// The caller guarantees the stone has this group's owner and is
    /// adjacent to an existing member (or the group is empty). Adding a
    /// stone that is already present changes nothing.
    pub fn add_stone(&mut self, stone: Stone, board: &Board) {
        if self.stones.insert(stone.location, stone).is_some() {
            return;
        }
        if board.is_corner(stone.location) {
            self.corner_count += 1;
        }
        if let Some(side) = board.board_side(stone.location) {
            self.sides_touched.insert(side);
        }
    }

    /// Fold another group of the same owner into this one.
    ///
    /// Groups are disjoint, so corner counts add and side sets union.
    /// The result does not depend on merge order.
    pub fn absorb(&mut self, other: StoneGroup) {
        debug_assert_eq!(self.owner, other.owner);
        debug_assert!(other.stones.keys().all(|loc| !self.stones.contains_key(loc)));

        tracing::trace!(into = self.len(), from = other.len(), "merging groups");
        self.corner_count += other.corner_count;
        self.sides_touched = self.sides_touched.union(other.sides_touched);
        self.stones.extend(other.stones);
    }

    /// Merge any number of same-owner groups into one.
    ///
    /// Returns `None` for an empty input.
    pub fn merge(groups: impl IntoIterator<Item = StoneGroup>) -> Option<StoneGroup> {
        let mut groups = groups.into_iter();
        let mut merged = groups.next()?;
        for group in groups {
            merged.absorb(group);
        }
        Some(merged)
    }

    /// A bridge connects at least two corners.
    #[must_use]
    pub fn has_bridge(&self) -> bool {
        self.corner_count >= 2
    }

    /// A fork connects at least three distinct sides.
    #[must_use]
    pub fn has_fork(&self) -> bool {
        self.sides_touched.len() >= 3
    }

    /// Check whether a ring in this group passes through `stone`.
    ///
    /// Returns `Err(GameError::GroupMembership)` if `stone` is not a member.
    pub fn has_ring_through(&self, stone: &Stone, board: &Board) -> Result<bool> {
        if !self.contains_stone(stone) {
            return Err(GameError::GroupMembership {
                location: stone.location,
            });
        }
        Ok(self.ring_through(stone.location, board))
    }

    /// Ring check for a location already known to be a member.
    pub(crate) fn ring_through(&self, location: Coordinate, board: &Board) -> bool {
        debug_assert!(self.contains(location));
        ring::has_ring_through(board, |cell| self.stones.contains_key(&cell), location)
    }
}
