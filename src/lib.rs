//! Strictly Timeline library - tic-tac-toe with time travel
//!
//! The engine keeps every board snapshot of a game. Any earlier snapshot
//! can be made active again; playing from there discards the later
//! snapshots and continues on a new branch.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection over a single board
//! - **GameState**: history log, active step, move application and jumps
//! - **DerivedView**: everything a presentation layer needs to draw
//! - **Observer**: version counter and change callbacks for re-rendering
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! assert_eq!(game.view().status_text(), "Next player: X");
//!
//! game.jump_to(1).unwrap();
//! assert_eq!(game.view().status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, DerivedView, GameState, IgnoreReason, Mark, Move, MoveListEntry, MoveOutcome, Player,
    Position, Square, StateChange, Status, SubscriptionId, TimelineError, WinningLine,
    check_winner, jump_label, winning_line,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    ActiveStepInRange, AlternatingMarks, GenesisEmpty, Invariant, InvariantSet,
    InvariantViolation, SingleSquareDelta, TimelineInvariants,
};
