//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added between step `i` and step `i + 1` belongs
/// to the player whose turn it was at step `i`.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Square::Occupied(Player::for_step(step));
                pair[0]
                    .changed_positions(&pair[1])
                    .iter()
                    .all(|pos| pair[1].get(*pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
