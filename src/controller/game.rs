//! The game controller: lifecycle, turn order, placement and win checks.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --start_game--> InProgress --(win or full board)--> Completed
//! ```
//!
//! `set_board_size` is only accepted before the game starts, so the board
//! never changes under existing stones. Nothing leaves `Completed`.
//!
//! ## Placement
//!
//! Per-cell state lives in two dense tables indexed by
//! `Board::index_of`: the stone on each cell and the group it belongs to.
//! A placement looks up the same-owner groups around the new stone, folds
//! them into the largest one, adds the stone and evaluates only that group.
//! Every check that can reject a placement runs before anything is
//! mutated, and nothing after it can fail: the result is known before the
//! cell tables, counters or turn change.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::events::{EventBus, GameEvent, ListenerId};
use super::snapshot::GameSnapshot;
use crate::board::Board;
use crate::core::{Coordinate, GameConfig, GameError, IllegalMoveReason, Player, PlayerMap, Result, Stone};
use crate::groups::{GroupId, StoneGroup};
use crate::rules::{evaluate_group, GameResult};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Board size may still change; no stones may be placed.
    #[default]
    NotStarted,
    /// Players alternate placing stones.
    InProgress,
    /// Someone won or the board is full.
    Completed,
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::NotStarted => write!(f, "not started"),
            GameState::InProgress => write!(f, "in progress"),
            GameState::Completed => write!(f, "completed"),
        }
    }
}

/// Owns all game state and is the only thing that mutates it.
///
/// Single-threaded: a host that shares a controller across threads must
/// serialize the mutating commands itself.
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    state: GameState,
    current_player: Player,
    result: Option<GameResult>,

    groups: FxHashMap<GroupId, StoneGroup>,
    next_group_id: u32,

    /// Stone per cell, in `Board::index_of` order.
    cells: im::Vector<Option<Stone>>,
    /// Group per cell, in `Board::index_of` order.
    membership: Vec<Option<GroupId>>,
    placed: PlayerMap<usize>,

    events: EventBus,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Create a controller with the default configuration (board size 6).
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(GameConfig::default(), Board::default())
    }

    /// Create a controller from a configuration.
    ///
    /// Fails with `GameError::InvalidSize` if the configuration is invalid.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.default_board_size)?;
        Ok(Self::from_parts(config, board))
    }

    fn from_parts(config: GameConfig, board: Board) -> Self {
        let cell_count = board.cell_count();
        Self {
            config,
            board,
            state: GameState::NotStarted,
            current_player: Player::One,
            result: None,
            groups: FxHashMap::default(),
            next_group_id: 0,
            cells: std::iter::repeat(None).take(cell_count).collect(),
            membership: vec![None; cell_count],
            placed: PlayerMap::with_value(0),
            events: EventBus::default(),
        }
    }

    // === Queries ===

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Player to move next.
    ///
    /// Still advances on the winning placement, so after a win this is the
    /// loser.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner, once the game is completed with a winning group.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.as_ref().and_then(GameResult::winner)
    }

    /// The final result, once the game is completed.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// True if a placement at `location` would be accepted.
    ///
    /// Requires the game to be in progress and `location` to be an empty
    /// cell on the board. Never mutates anything.
    #[must_use]
    pub fn can_place_stone(&self, location: Coordinate) -> bool {
        self.check_placement(location).is_ok()
    }

    /// The stone on a cell, if any.
    #[must_use]
    pub fn get_stone(&self, location: Coordinate) -> Option<Stone> {
        let index = self.board.index_of(location)?;
        self.cells.get(index).copied().flatten()
    }

    /// The group occupying a cell, if any.
    #[must_use]
    pub fn group_at(&self, location: Coordinate) -> Option<&StoneGroup> {
        let id = self.group_id_at(location)?;
        self.groups.get(&id)
    }

    /// All live groups.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &StoneGroup)> {
        self.groups.iter().map(|(id, group)| (*id, group))
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.placed.iter().map(|(_, count)| *count).sum()
    }

    /// Number of stones a player has placed.
    #[must_use]
    pub fn stones_placed_by(&self, player: Player) -> usize {
        self.placed[player]
    }

    /// All stones, in `Board::coordinates()` order.
    #[must_use]
    pub fn stones(&self) -> Vec<Stone> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Every cell where `place_stone` would currently succeed.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        if self.state != GameState::InProgress {
            return Vec::new();
        }
        self.board
            .coordinates()
            .into_iter()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_none())
            .map(|(location, _)| location)
            .collect()
    }

    /// Cheap copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.clone(),
            self.state,
            self.current_player,
            self.result.clone(),
            self.cells.clone(),
        )
    }

    // === Observers ===

    /// Register a listener called after each successful command.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.events.subscribe(Box::new(listener))
    }

    /// Remove a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Number of subscribed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.events.len()
    }

    // === Commands ===

    /// Replace the board with a fresh one of the given size.
    ///
    /// Only valid before the game starts. Fails with `InvalidState` after
    /// that, or `InvalidSize` if the configuration does not accept `size`.
    pub fn set_board_size(&mut self, size: u16) -> Result<()> {
        self.require_not_started("change the board size")?;
        if let Err(err) = self.config.check_board_size(size) {
            tracing::debug!(size, error = %err, "board resize rejected");
            return Err(err);
        }
        let board = Board::new(size)?;

        let cell_count = board.cell_count();
        self.board = board;
        self.cells = std::iter::repeat(None).take(cell_count).collect();
        self.membership = vec![None; cell_count];

        tracing::debug!(size, cells = cell_count, "board resized");
        self.events.emit(&GameEvent::BoardResized { size });
        Ok(())
    }

    /// Start the game. Only valid once, from `NotStarted`.
    pub fn start_game(&mut self) -> Result<()> {
        self.require_not_started("start the game")?;
        self.state = GameState::InProgress;

        tracing::info!(size = self.board.size(), first = %self.current_player, "game started");
        self.events.emit(&GameEvent::GameStarted {
            size: self.board.size(),
            first_player: self.current_player,
        });
        Ok(())
    }

    /// Place a stone for the current player.
    ///
    /// Returns `Ok(None)` if the game continues and `Ok(Some(result))` if
    /// this placement completed it. A rejected placement returns
    /// `Err(GameError::IllegalMove)` and changes nothing.
    pub fn place_stone(&mut self, location: Coordinate) -> Result<Option<GameResult>> {
        let index = match self.check_placement(location) {
            Ok(index) => index,
            Err(reason) => {
                tracing::debug!(%location, %reason, "placement rejected");
                return Err(GameError::IllegalMove { location, reason });
            }
        };

        let player = self.current_player;
        let stone = Stone::new(location, player);
        let group_id = self.merge_adjacent_groups(location, player);

        let mut group = self
            .groups
            .remove(&group_id)
            .unwrap_or_else(|| StoneGroup::new(player));
        group.add_stone(stone, &self.board);
        let group_size = group.len();
        let result = self.evaluate(&group, location);

        self.groups.insert(group_id, group);
        self.cells.set(index, Some(stone));
        self.membership[index] = Some(group_id);
        self.placed[player] += 1;
        self.current_player = player.opponent();

        tracing::debug!(%location, %player, group = %group_id, group_size, "stone placed");

        self.events.emit(&GameEvent::StonePlaced {
            stone,
            group_size,
            next_player: self.current_player,
        });
        if let Some(result) = &result {
            self.finish(result.clone());
        }
        Ok(result)
    }

    // === Internals ===

    fn require_not_started(&self, operation: &'static str) -> Result<()> {
        if self.state == GameState::NotStarted {
            return Ok(());
        }
        tracing::debug!(operation, state = %self.state, "command rejected");
        Err(GameError::InvalidState {
            operation,
            state: self.state,
        })
    }

    /// Dense index of `location` if a stone may be placed there.
    fn check_placement(&self, location: Coordinate) -> std::result::Result<usize, IllegalMoveReason> {
        if self.state != GameState::InProgress {
            return Err(IllegalMoveReason::NotInProgress);
        }
        let index = self
            .board
            .index_of(location)
            .ok_or(IllegalMoveReason::OffBoard)?;
        match self.cells.get(index) {
            Some(None) => Ok(index),
            _ => Err(IllegalMoveReason::Occupied),
        }
    }

    fn group_id_at(&self, location: Coordinate) -> Option<GroupId> {
        let index = self.board.index_of(location)?;
        self.membership.get(index).copied().flatten()
    }

    /// Fold every `player` group next to `location` into the largest one.
    ///
    /// Returns the surviving group's ID, or a fresh ID when no neighbor
    /// belongs to `player`.
    fn merge_adjacent_groups(&mut self, location: Coordinate, player: Player) -> GroupId {
        let mut adjacent: SmallVec<[GroupId; 6]> = SmallVec::new();
        for neighbor in self.board.neighbors(location) {
            let Some(id) = self.group_id_at(neighbor) else {
                continue;
            };
            let same_owner = self.groups.get(&id).is_some_and(|g| g.owner() == player);
            if same_owner && !adjacent.contains(&id) {
                adjacent.push(id);
            }
        }

        let Some(target) = adjacent
            .iter()
            .copied()
            .max_by_key(|id| (self.groups.get(id).map_or(0, StoneGroup::len), std::cmp::Reverse(*id)))
        else {
            let id = GroupId::new(self.next_group_id);
            self.next_group_id += 1;
            return id;
        };

        for id in adjacent.into_iter().filter(|id| *id != target) {
            let Some(absorbed) = self.groups.remove(&id) else {
                continue;
            };
            for stone in absorbed.stones() {
                if let Some(index) = self.board.index_of(stone.location) {
                    self.membership[index] = Some(target);
                }
            }
            if let Some(survivor) = self.groups.get_mut(&target) {
                survivor.absorb(absorbed);
            }
        }
        target
    }

    /// Win or draw check for `group`, which holds the not yet recorded
    /// stone at `placed`.
    fn evaluate(&self, group: &StoneGroup, placed: Coordinate) -> Option<GameResult> {
        if let Some(victory) = evaluate_group(group, placed, &self.board) {
            return Some(GameResult::Winner(victory));
        }
        if self.stone_count() + 1 == self.board.cell_count() {
            return Some(GameResult::Draw);
        }
        None
    }

    fn finish(&mut self, result: GameResult) {
        self.state = GameState::Completed;
        let event = match &result {
            GameResult::Winner(victory) => {
                tracing::info!(
                    winner = %victory.player,
                    conditions = ?victory.conditions,
                    stones = victory.stones.len(),
                    "game won"
                );
                GameEvent::GameWon(victory.clone())
            }
            GameResult::Draw => {
                tracing::info!(stones = self.stone_count(), "game drawn");
                GameEvent::GameDrawn {
                    stones: self.stone_count(),
                }
            }
        };
        self.result = Some(result);
        self.events.emit(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> Coordinate {
        name.parse().unwrap()
    }

    fn started(size: u16) -> GameController {
        let mut game = GameController::new();
        game.set_board_size(size).unwrap();
        game.start_game().unwrap();
        game
    }

    #[test]
    fn test_new_controller() {
        let game = GameController::new();
        assert_eq!(game.state(), GameState::NotStarted);
        assert_eq!(game.board().size(), 6);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.winner(), None);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(GameState::NotStarted.to_string(), "not started");
        assert_eq!(GameState::Completed.to_string(), "completed");
    }

    #[test]
    fn test_merge_keeps_one_group() {
        let mut game = started(5);
        // One: c3, Two: a1, One: e3, Two: a2, One: d3 joins c3 and e3
        for name in ["c3", "a1", "e3", "a2", "d3"] {
            game.place_stone(c(name)).unwrap();
        }

        let group = game.group_at(c("d3")).unwrap();
        assert_eq!(group.len(), 3);
        assert_eq!(group.owner(), Player::One);
        assert_eq!(game.group_at(c("c3")), game.group_at(c("e3")));
        assert_eq!(game.groups().count(), 2);
    }

    #[test]
    fn test_opponent_stones_do_not_merge() {
        let mut game = started(5);
        game.place_stone(c("e5")).unwrap();
        game.place_stone(c("f5")).unwrap();

        assert_eq!(game.group_at(c("e5")).unwrap().len(), 1);
        assert_eq!(game.group_at(c("f5")).unwrap().owner(), Player::Two);
        assert_eq!(game.groups().count(), 2);
    }

    #[test]
    fn test_check_placement_reasons() {
        let mut game = GameController::new();
        assert_eq!(
            game.check_placement(c("a1")),
            Err(IllegalMoveReason::NotInProgress)
        );

        game.start_game().unwrap();
        assert_eq!(game.check_placement(c("a9")), Err(IllegalMoveReason::OffBoard));
        game.place_stone(c("a1")).unwrap();
        assert_eq!(game.check_placement(c("a1")), Err(IllegalMoveReason::Occupied));
    }

    #[test]
    fn test_winning_placement_is_fully_recorded() {
        let mut game = started(3);
        // One: a1, b1, c1 along the bottom edge joins two corners
        for name in ["a1", "e5", "b1", "e4"] {
            game.place_stone(c(name)).unwrap();
        }
        let result = game.place_stone(c("c1")).unwrap().unwrap();

        assert!(result.is_winner(Player::One));
        assert_eq!(game.state(), GameState::Completed);
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.stone_count(), 5);
        assert_eq!(game.get_stone(c("c1")), Some(Stone::new(c("c1"), Player::One)));

        let group = game.group_at(c("c1")).unwrap();
        assert_eq!(group.len(), 3);
        assert_eq!(game.group_at(c("a1")), Some(group));
        assert_eq!(game.groups().count(), 2);
    }
}
