//! Stones: an owner's mark on a cell.

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::player::Player;

/// A placed stone. Stones are never moved or removed.
///
/// Equality requires the same owner and the same location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    /// Cell the stone occupies.
    pub location: Coordinate,
    /// Player who placed it.
    pub owner: Player,
}

impl Stone {
    /// Create a new stone.
    #[must_use]
    pub const fn new(location: Coordinate, owner: Player) -> Self {
        Self { location, owner }
    }

    /// Unique string key, e.g. `one:e4`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.owner.tag(), self.location)
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.owner, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        let at = Coordinate::new(2, 5);
        assert_eq!(Stone::new(at, Player::One), Stone::new(at, Player::One));
        assert_ne!(Stone::new(at, Player::One), Stone::new(at, Player::Two));
        assert_ne!(
            Stone::new(at, Player::One),
            Stone::new(Coordinate::new(2, 2), Player::One)
        );
    }

    #[test]
    fn test_keys() {
        let at = Coordinate::new(2, 5);
        assert_eq!(Stone::new(at, Player::One).key(), "one:c5");
        assert_ne!(Stone::new(at, Player::One).key(), Stone::new(at, Player::Two).key());
        assert_ne!(
            Stone::new(at, Player::Two).key(),
            Stone::new(Coordinate::new(4, 5), Player::Two).key()
        );
    }
}
