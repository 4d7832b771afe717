//! Active step invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: the active step indexes an existing snapshot.
pub struct ActiveStepInRange;

impl Invariant<GameState> for ActiveStepInRange {
    fn holds(game: &GameState) -> bool {
        game.active_step() < game.step_count()
    }

    fn description() -> &'static str {
        "Active step points at an existing history entry"
    }
}
