//! Stub bot behavior.

mod common;

use havannah::{BotConfig, GameController, GameRng, GameState, MovePolicy, Player, RandomBot};

use common::started_game;

/// Play a full bot-versus-bot game and return the placed stones in order.
fn self_play(size: u16, seed: u64) -> (GameController, Vec<String>) {
    let mut game = started_game(size);
    let mut match_rng = GameRng::new(seed);
    let mut bots = [
        RandomBot::from_rng(match_rng.fork()),
        RandomBot::from_rng(match_rng.fork()),
    ];
    let mut moves = Vec::new();

    while game.state() == GameState::InProgress {
        let bot = &mut bots[game.current_player().index()];
        let location = bot.choose_move(&game).expect("a legal move exists while in progress");
        game.place_stone(location).unwrap();
        moves.push(location.to_string());
    }
    (game, moves)
}

#[test]
fn test_games_terminate() {
    for seed in 0..20 {
        let (game, moves) = self_play(4, seed);
        assert_eq!(game.state(), GameState::Completed);
        assert_eq!(moves.len(), game.stone_count());
        assert!(moves.len() <= game.board().cell_count());
        if game.winner().is_none() {
            assert_eq!(game.stone_count(), game.board().cell_count());
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let (first, first_moves) = self_play(5, 99);
    let (second, second_moves) = self_play(5, 99);
    assert_eq!(first_moves, second_moves);
    assert_eq!(first.result(), second.result());
}

#[test]
fn test_play_turn_is_noop_when_no_move() {
    let mut game = GameController::new();
    let mut bot = RandomBot::new(&BotConfig::default());

    assert_eq!(bot.choose_move(&game), None);
    assert_eq!(bot.play_turn(&mut game), Ok(None));
    assert_eq!(game.stone_count(), 0);
}

#[test]
fn test_play_turn_places_for_current_player() {
    let mut game = started_game(5);
    let mut bot = RandomBot::new(&BotConfig::default().with_seed(1));

    bot.play_turn(&mut game).unwrap();
    bot.play_turn(&mut game).unwrap();

    assert_eq!(game.stones_placed_by(Player::One), 1);
    assert_eq!(game.stones_placed_by(Player::Two), 1);
}
