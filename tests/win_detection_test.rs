//! Win detection over whole boards.

use strictly_timeline::{Board, Player, Position, Square, check_winner, winning_line};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn board_from(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (i, c) in marks.chars().enumerate() {
        squares[i] = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_every_line_wins_for_both_players() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let mut board = Board::new();
            for index in line {
                let pos = Position::from_index(index).unwrap();
                board.set(pos, Square::Occupied(player));
            }

            assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            let won = winning_line(&board).unwrap();
            let indices = won.line.map(|pos| pos.to_index());
            assert_eq!(indices, line);
        }
    }
}

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(check_winner(&Board::new()), None);
}

#[test]
fn test_full_board_without_line_has_no_winner() {
    let board = board_from("XOXXOOOXX");
    assert_eq!(board.occupied(), 9);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_line_with_other_marks_around() {
    let board = board_from("OX.OX..XO");
    assert_eq!(check_winner(&board), Some(Player::X));
}
