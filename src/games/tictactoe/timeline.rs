//! Game state with a branching move history.
//!
//! The history is a list of board snapshots; entry 0 is always the empty
//! board. Jumping changes only which snapshot is active. Making a move
//! from an earlier snapshot discards every later one and starts a new
//! branch from there.

use super::action::{IgnoreReason, Move, MoveOutcome, TimelineError};
use super::invariants::assert_invariants;
use super::observer::{Notifier, StateChange, SubscriptionId};
use super::rules::{check_winner, winning_line};
use super::types::{Board, Player, Square};
use super::view::{DerivedView, MoveListEntry, Status, jump_label};
use super::Position;
use tracing::{debug, info, instrument, warn};

/// Complete game state: history log plus the active step.
///
/// Whose turn it is is never stored; it follows from the parity of
/// the active step (X on even steps, O on odd).
#[derive(Debug)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) active_step: usize,
    notifier: Notifier,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            active_step: 0,
            notifier: Notifier::default(),
        }
    }

    /// Builds a game by applying raw cell indices in order.
    ///
    /// Moves that would be ignored interactively are ignored here too.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::CellOutOfRange` for an index above 8.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, TimelineError> {
        let mut game = Self::new();
        for &index in indices {
            game.apply_index(index)?;
        }
        Ok(game)
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of history entries, including the start.
    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the active history index.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Returns the board at the active step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.active_step]
    }

    /// Returns the player to move at the active step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.active_step)
    }

    /// Returns the winner on the active board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Returns the move that produced the snapshot at `step`.
    ///
    /// `None` for the start and for steps that do not exist.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 {
            return None;
        }
        let before = self.history.get(step - 1)?;
        let after = self.history.get(step)?;
        let position = before.changed_positions(after).into_iter().next()?;
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }

    /// Monotonic change counter; bumped once per placed move or jump.
    pub fn version(&self) -> u64 {
        self.notifier.version()
    }

    /// Registers a listener called after every placed move or jump.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> SubscriptionId {
        self.notifier.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Places the next player's mark at `position`.
    ///
    /// Ignored when the active board is already won or the square is
    /// taken. Otherwise history after the active step is discarded, the
    /// new snapshot is appended and becomes active.
    #[instrument(skip(self), fields(active_step = self.active_step, len = self.history.len()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let board = self.current_board();

        if let Some(winner) = check_winner(board) {
            debug!(%winner, "Move ignored: game already won");
            return MoveOutcome::Ignored(IgnoreReason::GameOver(winner));
        }
        if !board.is_empty(position) {
            debug!("Move ignored: square occupied");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let player = self.next_player();
        let mut next = board.clone();
        next.set(position, Square::Occupied(player));

        let discarded = self.history.len() - (self.active_step + 1);
        if discarded > 0 {
            info!(discarded, from_step = self.active_step, "Branching: discarding later history");
        }
        self.history.truncate(self.active_step + 1);
        self.history.push(next);
        self.active_step = self.history.len() - 1;

        assert_invariants(self);

        let mov = Move::new(player, position);
        info!(step = self.active_step, %mov, "Move placed");
        self.notifier.publish(StateChange::MovePlaced {
            step: self.active_step,
            mov,
        });
        MoveOutcome::Placed(mov)
    }

    /// Places a mark at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::CellOutOfRange` if `index > 8`; state is
    /// left unchanged.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, TimelineError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected out-of-range cell index");
            TimelineError::CellOutOfRange(index)
        })?;
        Ok(self.apply_move(position))
    }

    /// Makes `step` the active history index without touching history.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::StepOutOfRange` if `step` does not exist;
    /// state is left unchanged.
    #[instrument(skip(self), fields(from = self.active_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), TimelineError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejected out-of-range history jump");
            return Err(TimelineError::StepOutOfRange { step, len });
        }

        let from = self.active_step;
        self.active_step = step;
        debug!(to = step, next_player = %self.next_player(), "Jumped");
        self.notifier.publish(StateChange::Jumped { from, to: step });
        Ok(())
    }

    /// Computes the derived view for the active step.
    #[instrument(skip(self), fields(active_step = self.active_step))]
    pub fn view(&self) -> DerivedView {
        let board = self.current_board().clone();
        let won = winning_line(&board);
        let status = match won {
            Some(line) => Status::Winner(line.player),
            None => Status::NextPlayer(self.next_player()),
        };
        let moves = (0..self.history.len())
            .map(|step| {
                MoveListEntry::new(
                    step,
                    jump_label(step),
                    self.move_at(step),
                    step == self.active_step,
                )
            })
            .collect();

        DerivedView::new(board, status, won, self.active_step, moves)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
