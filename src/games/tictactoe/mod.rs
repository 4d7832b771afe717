//! Tic-tac-toe with a branching, navigable move history.

mod action;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod timeline;
mod types;
mod view;

pub use action::{IgnoreReason, Move, MoveOutcome, TimelineError};
pub use observer::{StateChange, SubscriptionId};
pub use position::Position;
pub use rules::{WinningLine, check_winner, winning_line};
pub use timeline::GameState;
pub use types::{Board, Player, Square};
pub use view::{DerivedView, MoveListEntry, Status, jump_label};

/// Alias for clarity: a player's symbol on the board.
pub type Mark = Player;
