//! Delta invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: `history[i]` differs from `history[i - 1]` in exactly one
/// square, and that square went from empty to occupied.
pub struct SingleSquareDelta;

impl Invariant<GameState> for SingleSquareDelta {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let changed = pair[0].changed_positions(&pair[1]);
            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty && pair[1].get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by exactly one newly placed mark"
    }
}
