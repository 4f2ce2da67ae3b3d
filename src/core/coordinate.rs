//! Cell coordinates on a hexagonal board.
//!
//! ## Addressing
//!
//! A cell is identified by a `(file, rank)` pair. Files are zero-based
//! integer indices (`0..2 * size - 1`); ranks start at 1. The axes are
//! skewed: moving one file right and one rank up stays on the same
//! diagonal, which is what makes the six hex directions expressible as
//! small integer offsets.
//!
//! ## Cell names
//!
//! For display, files are labelled `a`, `b`, ..., `z`, `aa`, `ab`, ...
//! (bijective base 26), so file 4 rank 4 is `e4`. Using integer indices
//! internally means the label alphabet never limits the board size.
//!
//! ```
//! use havannah::core::Coordinate;
//!
//! let cell: Coordinate = "e4".parse().unwrap();
//! assert_eq!(cell, Coordinate::new(4, 4));
//! assert_eq!(cell.cell_name(), "Cell e4");
//! assert_eq!(Coordinate::new(26, 3).to_string(), "aa3");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseCoordinateError;

/// Immutable cell identifier.
///
/// Two coordinates are equal iff file and rank match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Zero-based file index.
    pub file: u16,
    /// One-based rank.
    pub rank: u16,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(file: u16, rank: u16) -> Self {
        Self { file, rank }
    }

    /// Shift by a `(file, rank)` delta.
    ///
    /// Returns `None` if either component would leave the `u16` range.
    /// The result is not checked against any board.
    #[must_use]
    pub fn offset(self, file_delta: i16, rank_delta: i16) -> Option<Self> {
        Some(Self {
            file: self.file.checked_add_signed(file_delta)?,
            rank: self.rank.checked_add_signed(rank_delta)?,
        })
    }

    /// Label of this coordinate's file (`a`, `b`, ..., `aa`, ...).
    #[must_use]
    pub fn file_label(&self) -> String {
        file_label(self.file)
    }

    /// Unique string key, e.g. `e4`.
    ///
    /// Distinct coordinates always produce distinct keys: the label is
    /// letters only and the rank digits only, so the split is unambiguous.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Accessible cell name, e.g. `Cell e4`.
    #[must_use]
    pub fn cell_name(&self) -> String {
        format!("Cell {self}")
    }
}

/// Label for a zero-based file index.
///
/// ```
/// use havannah::core::coordinate::file_label;
///
/// assert_eq!(file_label(0), "a");
/// assert_eq!(file_label(25), "z");
/// assert_eq!(file_label(26), "aa");
/// assert_eq!(file_label(27), "ab");
/// ```
#[must_use]
pub fn file_label(index: u16) -> String {
    let mut remaining = u32::from(index) + 1;
    let mut letters = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        letters.push(b'a' + (remaining % 26) as u8);
        remaining /= 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}

/// Inverse of [`file_label`]. Returns `None` for empty or non-letter input.
#[must_use]
pub fn parse_file_label(label: &str) -> Option<u16> {
    if label.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for ch in label.chars() {
        let ch = ch.to_ascii_lowercase();
        if !ch.is_ascii_lowercase() {
            return None;
        }
        value = value.checked_mul(26)?.checked_add(u32::from(ch as u8 - b'a') + 1)?;
    }
    u16::try_from(value - 1).ok()
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_label(), self.rank)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError { input: s.to_string() };
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(err)?;
        let (label, digits) = trimmed.split_at(split);
        let file = parse_file_label(label).ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }
        let rank: u16 = digits.parse().map_err(|_| err())?;
        Ok(Self::new(file, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        let a = Coordinate::new(3, 4);
        let b = Coordinate::new(3, 4);
        assert_eq!(a, b);
        assert_ne!(Coordinate::new(2, 2), Coordinate::new(2, 5));
        assert_ne!(Coordinate::new(4, 4), Coordinate::new(1, 4));
    }

    #[test]
    fn test_keys() {
        assert_eq!(Coordinate::new(2, 2).key(), Coordinate::new(2, 2).key());
        assert_ne!(Coordinate::new(2, 2).key(), Coordinate::new(2, 5).key());
        assert_ne!(Coordinate::new(4, 4).key(), Coordinate::new(1, 4).key());
        // "b" + "11" must not collide with anything like "b1" + "1"
        assert_eq!(Coordinate::new(1, 11).key(), "b11");
    }

    #[test]
    fn test_labels_round_trip() {
        for index in [0u16, 1, 25, 26, 27, 51, 52, 701, 702, 1000] {
            assert_eq!(parse_file_label(&file_label(index)), Some(index));
        }
        assert_eq!(file_label(701), "zz");
        assert_eq!(file_label(702), "aaa");
    }

    #[test]
    fn test_parse() {
        assert_eq!("e4".parse::<Coordinate>().unwrap(), Coordinate::new(4, 4));
        assert_eq!("Q17".parse::<Coordinate>().unwrap(), Coordinate::new(16, 17));
        assert_eq!("ab12".parse::<Coordinate>().unwrap(), Coordinate::new(27, 12));

        assert!("".parse::<Coordinate>().is_err());
        assert!("e".parse::<Coordinate>().is_err());
        assert!("4".parse::<Coordinate>().is_err());
        assert!("e4x".parse::<Coordinate>().is_err());
        assert!("é4".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_offset() {
        let c = Coordinate::new(0, 1);
        assert_eq!(c.offset(1, 1), Some(Coordinate::new(1, 2)));
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(0, -1), Some(Coordinate::new(0, 0)));
        assert_eq!(Coordinate::new(0, 0).offset(0, -1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(7, 9).to_string(), "h9");
        assert_eq!(Coordinate::new(7, 9).cell_name(), "Cell h9");
    }
}
