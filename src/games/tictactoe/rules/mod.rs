//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart
//! from history storage so they can be evaluated for any step.

pub mod win;

pub use win::{LINES, WinningLine, check_winner, winning_line};
