//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Havannah is strictly two-player: `Player::One` always moves first and
//! turns alternate until the game ends.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    One,
    /// Moves second.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index (`One` = 0, `Two` = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Identity tag used in keys (`one` / `two`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Player::One => "one",
            Player::Two => "two",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use havannah::core::{Player, PlayerMap};
///
/// let mut placed: PlayerMap<u32> = PlayerMap::with_value(0);
/// placed[Player::Two] += 1;
/// assert_eq!(placed[Player::One], 0);
/// assert_eq!(placed[Player::Two], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(player, value)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_display_and_tag() {
        assert_eq!(Player::One.to_string(), "Player One");
        assert_eq!(Player::Two.tag(), "two");
    }

    #[test]
    fn test_player_map() {
        let mut map = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[Player::One], 0);
        assert_eq!(map[Player::Two], 10);

        map[Player::One] = 5;
        let collected: Vec<_> = map.iter().map(|(p, v)| (p, *v)).collect();
        assert_eq!(collected, vec![(Player::One, 5), (Player::Two, 10)]);
    }
}
