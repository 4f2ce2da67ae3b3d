//! Outcome types and win evaluation for a single group.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coordinate, GameError, Player, Result, Stone};
use crate::groups::StoneGroup;

/// One of the three winning shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WinCondition {
    Bridge,
    Fork,
    Ring,
}

impl std::fmt::Display for WinCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinCondition::Bridge => write!(f, "bridge"),
            WinCondition::Fork => write!(f, "fork"),
            WinCondition::Ring => write!(f, "ring"),
        }
    }
}

/// A winning group, as recorded at the end of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    /// Owner of the winning group.
    pub player: Player,
    /// Every condition the group satisfies, in `Bridge, Fork, Ring` order.
    pub conditions: SmallVec<[WinCondition; 3]>,
    /// Locations of the winning group's stones, sorted.
    pub stones: Vec<Coordinate>,
}

impl Victory {
    /// Check whether the win includes a given shape.
    #[must_use]
    pub fn has(&self, condition: WinCondition) -> bool {
        self.conditions.contains(&condition)
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player formed a winning group.
    Winner(Victory),
    /// The board filled up with no winning group.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(victory) if victory.player == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(victory) => Some(victory.player),
            GameResult::Draw => None,
        }
    }

    /// The victory details, if any.
    #[must_use]
    pub fn victory(&self) -> Option<&Victory> {
        match self {
            GameResult::Winner(victory) => Some(victory),
            GameResult::Draw => None,
        }
    }
}

/// Evaluate the group that just received `placed`.
///
/// Returns `Ok(None)` if no condition holds. All three conditions are
/// checked so the returned `Victory` lists every shape the group forms.
///
/// Fails with `GameError::GroupMembership` if `placed` is not in `group`.
pub fn detect_win(group: &StoneGroup, placed: &Stone, board: &Board) -> Result<Option<Victory>> {
    if !group.contains_stone(placed) {
        return Err(GameError::GroupMembership {
            location: placed.location,
        });
    }
    Ok(evaluate_group(group, placed.location, board))
}

/// `detect_win` without the membership check; `placed` must be in `group`.
pub(crate) fn evaluate_group(group: &StoneGroup, placed: Coordinate, board: &Board) -> Option<Victory> {
    let mut conditions = SmallVec::new();
    if group.has_bridge() {
        conditions.push(WinCondition::Bridge);
    }
    if group.has_fork() {
        conditions.push(WinCondition::Fork);
    }
    if group.ring_through(placed, board) {
        conditions.push(WinCondition::Ring);
    }

    if conditions.is_empty() {
        return None;
    }
    Some(Victory {
        player: group.owner(),
        conditions,
        stones: group.locations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(board: &Board, owner: Player, names: &[&str]) -> StoneGroup {
        let mut group = StoneGroup::new(owner);
        for name in names {
            group.add_stone(Stone::new(name.parse().unwrap(), owner), board);
        }
        group
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Victory {
            player: Player::Two,
            conditions: SmallVec::from_slice(&[WinCondition::Ring]),
            stones: Vec::new(),
        });
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));
        assert_eq!(result.winner(), Some(Player::Two));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::One));
        assert!(!draw.is_winner(Player::Two));
        assert!(draw.victory().is_none());
    }

    #[test]
    fn test_no_win() {
        let board = Board::new(5).unwrap();
        let group = group_of(&board, Player::One, &["e5", "f5"]);
        let placed = Stone::new("f5".parse().unwrap(), Player::One);
        assert_eq!(detect_win(&group, &placed, &board), Ok(None));
    }

    #[test]
    fn test_bridge_reports_stones() {
        let board = Board::new(3).unwrap();
        let group = group_of(&board, Player::One, &["a1", "b1", "c1"]);
        let placed = Stone::new("b1".parse().unwrap(), Player::One);

        let victory = detect_win(&group, &placed, &board).unwrap().unwrap();
        assert_eq!(victory.player, Player::One);
        assert!(victory.has(WinCondition::Bridge));
        assert!(!victory.has(WinCondition::Ring));
        assert_eq!(victory.stones.len(), 3);
    }

    #[test]
    fn test_ring_only_counts_through_placed_stone() {
        let board = Board::new(5).unwrap();
        let group = group_of(&board, Player::Two, &["f6", "e6", "d5", "d4", "e4", "f5", "g5"]);

        let on_ring = Stone::new("e4".parse().unwrap(), Player::Two);
        let victory = detect_win(&group, &on_ring, &board).unwrap().unwrap();
        assert_eq!(victory.conditions.as_slice(), &[WinCondition::Ring]);

        let tail = Stone::new("g5".parse().unwrap(), Player::Two);
        assert_eq!(detect_win(&group, &tail, &board), Ok(None));
    }

    #[test]
    fn test_foreign_stone_is_an_error() {
        let board = Board::new(5).unwrap();
        let group = group_of(&board, Player::One, &["e5"]);
        let foreign = Stone::new("a1".parse().unwrap(), Player::One);
        assert!(matches!(
            detect_win(&group, &foreign, &board),
            Err(GameError::GroupMembership { .. })
        ));
    }

    #[test]
    fn test_evaluate_group_lists_every_shape() {
        let board = Board::new(3).unwrap();
        // a1 to c1 is a bridge; the hexagon around b2 is a ring through c2
        let group = group_of(&board, Player::One, &["a1", "b1", "c1", "c2", "c3", "b3", "a2"]);

        let victory = evaluate_group(&group, "c2".parse().unwrap(), &board).unwrap();
        assert_eq!(victory.conditions.as_slice(), &[WinCondition::Bridge, WinCondition::Ring]);
        assert_eq!(victory.stones.len(), 7);
    }
}
