//! Read-only projection of a game state for rendering.

use super::action::Move;
use super::rules::WinningLine;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The active board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }
}

/// Label for the history action that jumps to `step`.
pub fn jump_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// One entry of the move list, one per history snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    step: usize,
    /// "Go to game start" / "Go to move #N".
    label: String,
    /// The move that produced this snapshot (`None` for the start).
    played: Option<Move>,
    /// Whether this is the active step.
    active: bool,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DerivedView {
    /// Board at the active step.
    board: Board,
    /// Winner or next player.
    status: Status,
    /// Completed line on the active board, if any.
    winning_line: Option<WinningLine>,
    /// The active history index.
    active_step: usize,
    /// Number of history entries, including the start.
    move_count: usize,
    /// Jump actions, one per history entry.
    moves: Vec<MoveListEntry>,
}

impl DerivedView {
    pub(crate) fn new(
        board: Board,
        status: Status,
        winning_line: Option<WinningLine>,
        active_step: usize,
        moves: Vec<MoveListEntry>,
    ) -> Self {
        Self {
            board,
            status,
            winning_line,
            active_step,
            move_count: moves.len(),
            moves,
        }
    }

    /// Status text, e.g. `"Next player: X"` or `"Winner: O"`.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Cell labels in row-major order.
    pub fn cell_labels(&self) -> [&'static str; 9] {
        let squares = *self.board.squares();
        squares.map(|square| square.label())
    }
}
