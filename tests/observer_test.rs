//! Change notification: version counter and subscriptions.

use std::cell::RefCell;
use std::rc::Rc;
use strictly_timeline::{GameState, Move, Player, Position, StateChange, TimelineError};

fn recording(game: &mut GameState) -> Rc<RefCell<Vec<StateChange>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    game.subscribe(move |change| sink.borrow_mut().push(*change));
    seen
}

#[test]
fn test_version_bumps_once_per_effective_change() {
    let mut game = GameState::new();
    assert_eq!(game.version(), 0);

    game.apply_move(Position::Center);
    assert_eq!(game.version(), 1);

    game.apply_move(Position::Center); // occupied
    assert_eq!(game.version(), 1);

    game.jump_to(0).unwrap();
    assert_eq!(game.version(), 2);

    assert_eq!(game.jump_to(5), Err(TimelineError::StepOutOfRange { step: 5, len: 2 }));
    assert_eq!(game.version(), 2);

    game.jump_to(0).unwrap(); // same step still notifies
    assert_eq!(game.version(), 3);
}

#[test]
fn test_subscriber_sees_moves_and_jumps() {
    let mut game = GameState::new();
    let seen = recording(&mut game);

    game.apply_move(Position::TopLeft);
    game.apply_move(Position::Center);
    game.jump_to(1).unwrap();
    game.apply_move(Position::BottomRight);

    assert_eq!(
        seen.borrow().as_slice(),
        &[
            StateChange::MovePlaced {
                step: 1,
                mov: Move::new(Player::X, Position::TopLeft),
            },
            StateChange::MovePlaced {
                step: 2,
                mov: Move::new(Player::O, Position::Center),
            },
            StateChange::Jumped { from: 2, to: 1 },
            StateChange::MovePlaced {
                step: 2,
                mov: Move::new(Player::O, Position::BottomRight),
            },
        ]
    );
}

#[test]
fn test_ignored_moves_do_not_notify() {
    let mut game = GameState::replay(&[0, 1, 3, 4, 6]).unwrap();
    let seen = recording(&mut game);

    game.apply_move(Position::BottomRight);
    game.apply_move(Position::TopLeft);

    assert!(seen.borrow().is_empty());
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut game = GameState::new();
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    let id = game.subscribe(move |_| *sink.borrow_mut() += 1);

    game.apply_move(Position::Center);
    assert!(game.unsubscribe(id));
    game.apply_move(Position::TopLeft);

    assert_eq!(*seen.borrow(), 1);
    assert!(!game.unsubscribe(id));
}

#[test]
fn test_multiple_subscribers_in_order() {
    let mut game = GameState::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let sink = Rc::clone(&order);
        game.subscribe(move |_| sink.borrow_mut().push(name));
    }

    game.apply_move(Position::Center);
    assert_eq!(order.borrow().as_slice(), &["first", "second"]);
}
