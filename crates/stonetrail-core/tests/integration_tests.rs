//! Integration tests for the Stonetrail game engine.
//!
//! These tests verify complete game flows through the public API, from
//! board generation through to terminal-state detection and save/load.

use rand::rngs::StdRng;
use rand::SeedableRng;
use stonetrail_core::*;

/// Build a state with a hand-picked stick set by restoring a snapshot,
/// the same path a loaded save file takes.
fn state_with_sticks(grid_size: i32, sticks: &[[i32; 4]]) -> GameState {
    Snapshot {
        grid_size,
        player1_turn: true,
        sticks: sticks.to_vec(),
        stones: Vec::new(),
    }
    .restore()
    .expect("snapshot should restore")
}

/// Drive a game with the advisor until no move remains
fn play_out(game: &mut GameState) -> usize {
    let mut placed = 0;
    while let Some(node) = suggest_move(game) {
        game.place_stone(node).expect("suggested move should be legal");
        placed += 1;
        assert!(placed <= (game.grid_size() * game.grid_size()) as usize);
    }
    placed
}

#[test]
fn test_generated_boards_satisfy_geometry_invariants() {
    for grid_size in 2..=10 {
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = GameState::new_with_rng(grid_size, &mut rng);
            let board = game.board();

            assert!(board.sticks().len() <= (2 * grid_size * (grid_size - 1)) as usize);
            for stick in board.sticks() {
                assert!(stick.a.in_bounds(grid_size));
                assert!(stick.b.in_bounds(grid_size));
                assert!(stick.a.is_adjacent_to(&stick.b));
            }
        }
    }
}

#[test]
fn test_same_seed_same_board() {
    let mut rng1 = StdRng::seed_from_u64(123);
    let mut rng2 = StdRng::seed_from_u64(123);
    let game1 = GameState::new_with_rng(6, &mut rng1);
    let game2 = GameState::new_with_rng(6, &mut rng2);
    assert_eq!(game1.board().sticks(), game2.board().sticks());
}

#[test]
fn test_two_bridge_scenario() {
    // gridSize=2 with sticks (0,0)-(0,1) and (0,1)-(1,1)
    let mut game = state_with_sticks(2, &[[0, 0, 0, 1], [0, 1, 1, 1]]);

    // First move is unconstrained
    assert!(game.place_stone(Node::new(0, 0)).is_ok());

    // (1,1) is not adjacent to (0,0)
    assert_eq!(game.place_stone(Node::new(1, 1)), Err(GameError::InvalidMove));

    // (0,1) is reachable over the first stick
    assert!(game.place_stone(Node::new(0, 1)).is_ok());

    // (1,1) is still reachable from (0,1), so the game goes on
    assert!(!game.is_game_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_full_game_to_terminal_state() {
    let mut game = state_with_sticks(
        3,
        &[[0, 0, 0, 1], [0, 1, 0, 2], [0, 2, 1, 2], [1, 2, 2, 2]],
    );

    let placed = play_out(&mut game);

    assert!(game.is_game_over());
    assert!(placed >= 1);
    assert_eq!(suggest_move(&game), None);
    assert!(game.valid_moves().is_empty());

    // Last placer wins, player to move loses
    let last = game.stones().last().expect("at least one stone placed");
    assert_eq!(game.winner(), Some(last.player));
    assert_eq!(game.current_player(), last.player.opponent());
}

#[test]
fn test_random_games_end_and_respect_rules() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new_with_rng(5, &mut rng);

        play_out(&mut game);
        assert!(game.is_game_over());

        // No stacking anywhere in the history
        let stones = game.stones();
        for (i, stone) in stones.iter().enumerate() {
            for later in &stones[i + 1..] {
                assert_ne!(stone.node, later.node);
            }
        }

        // Turns alternated, player one first
        for (i, stone) in stones.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(stone.player, expected);
        }

        // Every non-initial stone sits on a stick shared with its predecessor
        for pair in stones.windows(2) {
            assert!(game.board().has_stick_between(pair[0].node, pair[1].node));
        }
    }
}

#[test]
fn test_save_load_round_trip_mid_game() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut game = GameState::new_with_rng(5, &mut rng);
    game.place_stone(Node::new(3, 3)).unwrap();
    if let Some(node) = suggest_move(&game) {
        game.place_stone(node).unwrap();
    }

    let payload = Snapshot::capture(&game).to_json().unwrap();
    let restored = Snapshot::from_json(&payload).unwrap().restore().unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.grid_size(), game.grid_size());
    assert_eq!(restored.is_player1_turn(), game.is_player1_turn());
    assert_eq!(restored.board().sticks(), game.board().sticks());
    assert_eq!(restored.stones(), game.stones());
}

#[test]
fn test_failed_load_leaves_game_untouched() {
    let mut game = state_with_sticks(3, &[[0, 0, 0, 1]]);
    game.place_stone(Node::new(0, 0)).unwrap();
    let before = game.clone();

    let result = Snapshot::from_json("{\"garbage\": true}");
    assert!(result.is_err());

    // The running game was never handed to the failed restore
    assert_eq!(game, before);
}

#[test]
fn test_loaded_game_continues_playable() {
    let snapshot = Snapshot {
        grid_size: 2,
        player1_turn: false,
        sticks: vec![[0, 0, 1, 0]],
        stones: vec![save::StoneRecord {
            x: 0,
            y: 0,
            player: Player::One,
        }],
    };
    let mut game = snapshot.restore().unwrap();

    assert_eq!(game.current_player(), Player::Two);
    let stone = game.place_stone(Node::new(1, 0)).unwrap();
    assert_eq!(stone.player, Player::Two);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Player::Two));
}
