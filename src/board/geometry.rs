//! Static geometry of a hexagonal Havannah board.
//!
//! ## Layout
//!
//! A board of size `s` has `2s - 1` files and `2s - 1` ranks. Files left
//! of the middle file start at rank 1 and end early; files right of it
//! start late and end at the top rank:
//!
//! ```text
//! first_rank(f) = 1                  if f <= s - 1
//!               = 1 + f - (s - 1)    otherwise
//! last_rank(f)  = s + f              if f <  s - 1
//!               = 2s - 1             otherwise
//! ```
//!
//! The six neighbor offsets in `(file, rank)` space are
//! `(+1,+1) (0,+1) (-1,0) (-1,-1) (0,-1) (+1,0)`.
//!
//! ## Dense indexing
//!
//! `index_of` maps every cell to `0..cell_count()` in the same order as
//! `coordinates()` (rank-major, ascending file within a rank), so per-cell
//! state can live in a flat vector.

use smallvec::SmallVec;

use super::side::{BoardSide, CellKind};
use crate::core::coordinate::file_label;
use crate::core::{Coordinate, GameError, Result};

/// The six hex directions as `(file, rank)` deltas.
pub const NEIGHBOR_OFFSETS: [(i16, i16); 6] = [(1, 1), (0, 1), (-1, 0), (-1, -1), (0, -1), (1, 0)];

/// Neighbor list; never longer than six.
pub type Neighbors = SmallVec<[Coordinate; 6]>;

/// Immutable board geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u16,
    /// `row_offsets[r - 1]` = number of cells on ranks below `r`.
    /// The final entry is the total cell count.
    row_offsets: Vec<usize>,
}

impl Board {
    /// Smallest playable board.
    pub const MIN_SIZE: u16 = 2;

    /// Largest supported board.
    ///
    /// Files are integer indices, so this is a practicality bound rather
    /// than a labelling one.
    pub const MAX_SIZE: u16 = 32;

    /// Size of a board built with `Board::default()`.
    pub const DEFAULT_SIZE: u16 = 6;

    /// Create a board of the given size.
    ///
    /// Returns `Err(GameError::InvalidSize)` outside `MIN_SIZE..=MAX_SIZE`.
    pub fn new(size: u16) -> Result<Self> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidSize {
                size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self::build(size))
    }

    /// Build the rank offset table. `size` must already be in range.
    fn build(size: u16) -> Self {
        let s = usize::from(size);
        let mut row_offsets = Vec::with_capacity(2 * s);
        let mut total = 0;
        row_offsets.push(total);
        for rank in 1..2 * s {
            total += if rank <= s { s + rank - 1 } else { 3 * s - 1 - rank };
            row_offsets.push(total);
        }

        Self { size, row_offsets }
    }

    /// Board size (cells along each edge, corners included).
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Number of files, `2 * size - 1`.
    #[must_use]
    pub fn file_count(&self) -> u16 {
        2 * self.size - 1
    }

    /// Highest rank on the board, `2 * size - 1`.
    #[must_use]
    pub fn max_rank(&self) -> u16 {
        2 * self.size - 1
    }

    /// Total number of cells, `3 * size * (size - 1) + 1`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let s = usize::from(self.size);
        3 * s * (s - 1) + 1
    }

    /// File labels in index order (`a`, `b`, ...).
    #[must_use]
    pub fn files(&self) -> Vec<String> {
        (0..self.file_count()).map(file_label).collect()
    }

    /// First rank present in `file`, or `None` if the file is off the board.
    #[must_use]
    pub fn first_rank_in_file(&self, file: u16) -> Option<u16> {
        if file >= self.file_count() {
            return None;
        }
        let middle = self.size - 1;
        Some(if file <= middle { 1 } else { 1 + file - middle })
    }

    /// Last rank present in `file`, or `None` if the file is off the board.
    #[must_use]
    pub fn last_rank_in_file(&self, file: u16) -> Option<u16> {
        if file >= self.file_count() {
            return None;
        }
        let middle = self.size - 1;
        Some(if file >= middle { self.max_rank() } else { self.size + file })
    }

    /// First file present on `rank` (ranks are assumed on the board).
    fn first_file_in_rank(&self, rank: u16) -> u16 {
        if rank <= self.size {
            0
        } else {
            rank - self.size
        }
    }

    /// Last file present on `rank` (ranks are assumed on the board).
    fn last_file_in_rank(&self, rank: u16) -> u16 {
        if rank <= self.size {
            self.size + rank - 2
        } else {
            self.file_count() - 1
        }
    }

    /// Check whether a coordinate lies on this board.
    #[must_use]
    pub fn is_valid(&self, coord: Coordinate) -> bool {
        match (self.first_rank_in_file(coord.file), self.last_rank_in_file(coord.file)) {
            (Some(first), Some(last)) => (first..=last).contains(&coord.rank),
            _ => false,
        }
    }

    /// All cells, ordered by ascending rank then ascending file.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let mut coords = Vec::with_capacity(self.cell_count());
        for rank in 1..=self.max_rank() {
            for file in self.first_file_in_rank(rank)..=self.last_file_in_rank(rank) {
                coords.push(Coordinate::new(file, rank));
            }
        }
        coords
    }

    /// Dense index of a cell in `coordinates()` order.
    #[must_use]
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if !self.is_valid(coord) {
            return None;
        }
        let row = usize::from(coord.rank - 1);
        Some(self.row_offsets[row] + usize::from(coord.file - self.first_file_in_rank(coord.rank)))
    }

    /// Inverse of [`Board::index_of`].
    #[must_use]
    pub fn coordinate_at(&self, index: usize) -> Option<Coordinate> {
        if index >= self.cell_count() {
            return None;
        }
        // row_offsets[0] == 0 <= index, so the partition point is at least 1
        let row = self.row_offsets.partition_point(|&offset| offset <= index) - 1;
        let rank = u16::try_from(row + 1).ok()?;
        let file = self.first_file_in_rank(rank) + u16::try_from(index - self.row_offsets[row]).ok()?;
        Some(Coordinate::new(file, rank))
    }

    /// The six geometric neighbor candidates, on the board or not.
    ///
    /// A candidate is `None` only when it would fall below file or rank 0.
    #[must_use]
    pub fn neighbor_candidates(&self, coord: Coordinate) -> [Option<Coordinate>; 6] {
        NEIGHBOR_OFFSETS.map(|(df, dr)| coord.offset(df, dr))
    }

    /// Neighbors of a cell that lie on this board.
    ///
    /// Yields 3 for corners, 4 for side cells and 6 for interior cells,
    /// in [`NEIGHBOR_OFFSETS`] order.
    #[must_use]
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        self.neighbor_candidates(coord)
            .into_iter()
            .flatten()
            .filter(|candidate| self.is_valid(*candidate))
            .collect()
    }

    /// Check whether two cells are adjacent.
    #[must_use]
    pub fn are_adjacent(&self, a: Coordinate, b: Coordinate) -> bool {
        self.is_valid(a)
            && self.is_valid(b)
            && NEIGHBOR_OFFSETS
                .iter()
                .any(|&(df, dr)| a.offset(df, dr) == Some(b))
    }

    /// Classify a cell by its neighbor count. `None` if off the board.
    #[must_use]
    pub fn cell_kind(&self, coord: Coordinate) -> Option<CellKind> {
        if !self.is_valid(coord) {
            return None;
        }
        match self.neighbors(coord).len() {
            3 => Some(CellKind::Corner),
            4 => Some(CellKind::Side),
            _ => Some(CellKind::Interior),
        }
    }

    /// True for the six cells with exactly three neighbors.
    #[must_use]
    pub fn is_corner(&self, coord: Coordinate) -> bool {
        self.cell_kind(coord) == Some(CellKind::Corner)
    }

    /// True for edge cells that are not corners.
    #[must_use]
    pub fn is_side(&self, coord: Coordinate) -> bool {
        self.cell_kind(coord) == Some(CellKind::Side)
    }

    /// The named side a side cell belongs to.
    ///
    /// Corners and interior cells return `None`.
    #[must_use]
    pub fn board_side(&self, coord: Coordinate) -> Option<BoardSide> {
        if !self.is_side(coord) {
            return None;
        }
        if coord.file == self.file_count() - 1 {
            Some(BoardSide::TopLeft)
        } else if coord.rank == self.max_rank() {
            Some(BoardSide::TopRight)
        } else if coord.rank == 1 {
            Some(BoardSide::BottomLeft)
        } else if coord.file == 0 {
            Some(BoardSide::BottomRight)
        } else if Some(coord.rank) == self.first_rank_in_file(coord.file) {
            Some(BoardSide::MiddleLeft)
        } else if Some(coord.rank) == self.last_rank_in_file(coord.file) {
            Some(BoardSide::MiddleRight)
        } else {
            None
        }
    }

    /// The six corners, counter-clockwise from `a1`.
    #[must_use]
    pub fn corners(&self) -> [Coordinate; 6] {
        let s = self.size;
        let top = self.max_rank();
        let last_file = self.file_count() - 1;
        [
            Coordinate::new(0, 1),
            Coordinate::new(s - 1, 1),
            Coordinate::new(last_file, s),
            Coordinate::new(last_file, top),
            Coordinate::new(s - 1, top),
            Coordinate::new(0, s),
        ]
    }

    /// The two corners bounding a side.
    ///
    /// A bridge running along a side connects exactly these two corners.
    #[must_use]
    pub fn side_endpoints(&self, side: BoardSide) -> [Coordinate; 2] {
        let [a1, bottom, right_mid, top_right, top, left_mid] = self.corners();
        match side {
            BoardSide::BottomLeft => [a1, bottom],
            BoardSide::MiddleLeft => [bottom, right_mid],
            BoardSide::TopLeft => [right_mid, top_right],
            BoardSide::TopRight => [top_right, top],
            BoardSide::MiddleRight => [top, left_mid],
            BoardSide::BottomRight => [left_mid, a1],
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::build(Self::DEFAULT_SIZE)
    }
}
