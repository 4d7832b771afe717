//! End-to-end scenarios: play to a win, travel back, branch.

use strictly_timeline::{
    Board, GameState, IgnoreReason, MoveOutcome, Player, Position, Square, Status,
};

fn labels(game: &GameState) -> [&'static str; 9] {
    game.view().cell_labels()
}

#[test]
fn test_play_to_column_win() {
    let mut game = GameState::new();
    assert_eq!(labels(&game), [" "; 9]);
    assert_eq!(game.view().status_text(), "Next player: X");

    game.apply_move(Position::TopLeft);
    assert_eq!(labels(&game), ["X", " ", " ", " ", " ", " ", " ", " ", " "]);
    assert_eq!(game.view().status_text(), "Next player: O");

    game.apply_move(Position::TopCenter);
    assert_eq!(labels(&game), ["X", "O", " ", " ", " ", " ", " ", " ", " "]);
    assert_eq!(game.view().status_text(), "Next player: X");

    game.apply_move(Position::MiddleLeft);
    assert_eq!(labels(&game), ["X", "O", " ", "X", " ", " ", " ", " ", " "]);

    game.apply_move(Position::Center);
    assert_eq!(labels(&game)[4], "O");

    game.apply_move(Position::BottomLeft);
    let view = game.view();
    assert_eq!(view.status_text(), "Winner: X");
    assert_eq!(*view.status(), Status::Winner(Player::X));
    assert_eq!(
        view.winning_line().as_ref().map(|won| won.line),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
    assert_eq!(game.step_count(), 6);
    assert_eq!(game.active_step(), 5);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
    let history = game.history().to_vec();
    let version = game.version();

    for pos in [Position::BottomRight, Position::TopRight, Position::TopLeft] {
        let outcome = game.apply_move(pos);
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameOver(Player::X)));
    }

    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.active_step(), 5);
    assert_eq!(game.version(), version);
}

#[test]
fn test_jump_back_and_branch() {
    let mut game = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();

    game.jump_to(2).unwrap();
    assert_eq!(labels(&game), ["X", "O", " ", " ", " ", " ", " ", " ", " "]);
    assert_eq!(game.view().status_text(), "Next player: X");
    assert_eq!(game.step_count(), 6, "jumping must not truncate");

    let outcome = game.apply_move(Position::Center);
    assert!(outcome.is_placed());
    assert_eq!(game.step_count(), 4);
    assert_eq!(game.active_step(), 3);
    assert_eq!(labels(&game), ["X", "O", " ", " ", "X", " ", " ", " ", " "]);
    assert_eq!(game.view().status_text(), "Next player: O");

    // The discarded future is gone: no step 4 to jump to.
    assert!(game.jump_to(4).is_err());
}

#[test]
fn test_jump_restores_history_entry_and_parity() {
    let mut game = GameState::replay(&[4, 0, 8, 2]).unwrap();

    for step in 0..game.step_count() {
        game.jump_to(step).unwrap();
        let view = game.view();
        assert_eq!(view.board(), &game.history()[step]);
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(*view.status(), Status::NextPlayer(expected));
    }
}

#[test]
fn test_jump_before_win_reopens_play() {
    let mut game = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
    game.jump_to(4).unwrap();

    assert_eq!(game.winner(), None);
    let outcome = game.apply_move(Position::BottomRight);
    assert!(outcome.is_placed());
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(game.step_count(), 6);
}

#[test]
fn test_move_list_labels() {
    let mut game = GameState::replay(&[4, 0, 8]).unwrap();
    game.jump_to(1).unwrap();
    let view = game.view();

    let labels: Vec<&str> = view.moves().iter().map(|m| m.label().as_str()).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1", "Go to move #2", "Go to move #3"]
    );

    let active: Vec<usize> = view
        .moves()
        .iter()
        .filter(|m| *m.active())
        .map(|m| *m.step())
        .collect();
    assert_eq!(active, vec![1]);
    assert_eq!(*view.move_count(), 4);
}

#[test]
fn test_new_game_view() {
    let game = GameState::new();
    let view = game.view();
    assert_eq!(view.board(), &Board::new());
    assert_eq!(view.status_text(), "Next player: X");
    assert_eq!(*view.move_count(), 1);
    assert_eq!(view.moves()[0].label(), "Go to game start");
    assert!(view.moves()[0].played().is_none());
}

#[test]
fn test_view_serializes_to_json() {
    let game = GameState::replay(&[4]).unwrap();
    let json = serde_json::to_value(game.view()).unwrap();

    assert_eq!(json["active_step"], 1);
    assert_eq!(json["move_count"], 2);
    assert_eq!(json["status"]["NextPlayer"], "O");
    assert_eq!(json["moves"][1]["label"], "Go to move #1");
}
