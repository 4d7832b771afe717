//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move request either
//! places a mark or is silently ignored; only contract violations on
//! raw input surface as errors.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move request left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The active board already has a winner.
    #[display("Game already won by {}", _0)]
    GameOver(Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of a move request.
///
/// Ignored moves are not errors: clicking an occupied square or
/// playing on a finished board simply does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new history entry.
    Placed(Move),
    /// The request was ignored; history and active step are unchanged.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}

/// Contract violations on raw adapter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TimelineError {
    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// A history step that does not exist.
    #[display("History step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
