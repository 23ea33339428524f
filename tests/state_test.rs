//! Scenario tests for the replayable game state.

use tictactoe_rewind::{GameState, Player, Position, Status};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index in range")
}

#[test]
fn move_grows_history_and_flips_player() {
    let mut game = GameState::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.next_player(), Player::X);

    game.apply_move(pos(4));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step(), 1);
    assert_eq!(game.next_player(), Player::O);

    game.apply_move(pos(0));
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.step(), 2);
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn occupied_square_is_ignored() {
    let mut game = GameState::new();
    game.apply_move(pos(4));

    let before = game.clone();
    game.apply_move(pos(4));

    assert_eq!(game, before);
}

#[test]
fn move_after_win_is_ignored() {
    // X takes the top row: 0, 3, 1, 4, 2.
    let mut game = GameState::new();
    for index in [0, 3, 1, 4, 2] {
        game.apply_move(pos(index));
    }
    assert!(matches!(game.status(), Status::Won(Player::X)));

    let before = game.clone();
    game.apply_move(pos(8));

    assert_eq!(game, before);
}

#[test]
fn jump_sets_player_by_parity() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4] {
        game.apply_move(pos(index));
    }
    let len = game.history().len();

    game.jump_to(3);
    assert_eq!(game.step(), 3);
    assert_eq!(game.next_player(), Player::O);
    assert_eq!(game.history().len(), len);

    game.jump_to(2);
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.history().len(), len);

    game.jump_to(0);
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.history().len(), len);
}

#[test]
fn jump_out_of_range_is_ignored() {
    let mut game = GameState::new();
    game.apply_move(pos(0));

    let before = game.clone();
    game.jump_to(5);

    assert_eq!(game, before);
}

#[test]
fn move_after_jump_truncates_future() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4] {
        game.apply_move(pos(index));
    }
    assert_eq!(game.history().len(), 5);

    game.jump_to(2);
    game.apply_move(pos(8));

    // Steps 3 and 4 were discarded before the new entry was appended.
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    let last = game.history().last().unwrap().moved().unwrap();
    assert_eq!(last.player, Player::X);
    assert_eq!(last.position, pos(8));
}

#[test]
fn jump_from_won_game_reopens_play() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4, 2] {
        game.apply_move(pos(index));
    }
    assert!(matches!(game.status(), Status::Won(Player::X)));

    // Rewind past the winning move; X is to move again on step 4.
    game.jump_to(4);
    assert!(matches!(game.status(), Status::InProgress(Player::X)));

    // Playing elsewhere truncates the old winning move.
    game.apply_move(pos(8));
    assert_eq!(game.history().len(), 6);
    assert!(matches!(game.status(), Status::InProgress(Player::O)));
}

#[test]
fn top_row_scenario_wins_for_x() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4, 2] {
        game.apply_move(pos(index));
    }

    let win = game.winner().expect("X should have won");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line, [pos(0), pos(1), pos(2)]);
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn toggle_order_reverses_move_list() {
    let mut game = GameState::with_order(true);
    for index in [4, 0, 8] {
        game.apply_move(pos(index));
    }

    let before = game.moves();
    assert_eq!(before.len(), 4);
    assert_eq!(before[0].label, "Go to game start");
    assert_eq!(before[1].label, "Go to move #1 : X (1, 1)");

    game.toggle_order();
    let after = game.moves();

    assert_eq!(after.len(), before.len());
    let mut reversed = before.clone();
    reversed.reverse();
    assert_eq!(after, reversed);

    // Toggling does not disturb the game itself.
    assert_eq!(game.step(), 3);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn json_round_trip_preserves_state() {
    let mut game = GameState::new();
    for index in [0, 3, 1] {
        game.apply_move(pos(index));
    }

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}
