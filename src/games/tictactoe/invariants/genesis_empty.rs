//! Genesis invariant: history starts from the empty board.

use super::super::GameState;
use super::Invariant;

/// Invariant: history entry 0 exists and is the empty board.
pub struct GenesisEmpty;

impl Invariant<GameState> for GenesisEmpty {
    fn holds(game: &GameState) -> bool {
        game.history().first().is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
