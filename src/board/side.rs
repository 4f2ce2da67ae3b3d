//! Board sides and cell classification.

use serde::{Deserialize, Serialize};

/// One of the six named edges of the board.
///
/// A side never includes its two corner endpoints. Orientation follows
/// the cell naming: `BottomLeft` is rank 1, `BottomRight` is file `a`,
/// `TopLeft` is the last file, `TopRight` is the last rank, and the two
/// `Middle` sides are the slanted edges in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoardSide {
    TopLeft,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomRight,
}

impl BoardSide {
    /// All six sides.
    pub const ALL: [BoardSide; 6] = [
        BoardSide::TopLeft,
        BoardSide::TopRight,
        BoardSide::MiddleLeft,
        BoardSide::MiddleRight,
        BoardSide::BottomLeft,
        BoardSide::BottomRight,
    ];

    /// Bit used by [`SideSet`].
    const fn bit(self) -> u8 {
        match self {
            BoardSide::TopLeft => 1 << 0,
            BoardSide::TopRight => 1 << 1,
            BoardSide::MiddleLeft => 1 << 2,
            BoardSide::MiddleRight => 1 << 3,
            BoardSide::BottomLeft => 1 << 4,
            BoardSide::BottomRight => 1 << 5,
        }
    }
}

impl std::fmt::Display for BoardSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoardSide::TopLeft => "top-left",
            BoardSide::TopRight => "top-right",
            BoardSide::MiddleLeft => "middle-left",
            BoardSide::MiddleRight => "middle-right",
            BoardSide::BottomLeft => "bottom-left",
            BoardSide::BottomRight => "bottom-right",
        };
        write!(f, "{name}")
    }
}

/// Set of board sides packed into one byte.
///
/// Union is commutative and idempotent, which is what lets groups merge
/// in any order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideSet(u8);

impl SideSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a side. Returns true if it was not already present.
    pub fn insert(&mut self, side: BoardSide) -> bool {
        let fresh = !self.contains(side);
        self.0 |= side.bit();
        fresh
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(&self, side: BoardSide) -> bool {
        self.0 & side.bit() != 0
    }

    /// Number of distinct sides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no side is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Set union.
    #[must_use]
    pub const fn union(self, other: SideSet) -> SideSet {
        SideSet(self.0 | other.0)
    }

    /// Iterate over the sides present, in [`BoardSide::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = BoardSide> + '_ {
        BoardSide::ALL.into_iter().filter(|side| self.contains(*side))
    }
}

impl FromIterator<BoardSide> for SideSet {
    fn from_iter<I: IntoIterator<Item = BoardSide>>(iter: I) -> Self {
        let mut set = SideSet::empty();
        for side in iter {
            set.insert(side);
        }
        set
    }
}

/// Classification of a cell by how many neighbors it has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Three neighbors.
    Corner,
    /// Four neighbors (edge cell that is not a corner).
    Side,
    /// Six neighbors.
    Interior,
}
