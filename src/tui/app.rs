//! Application state and key handling.
//!
//! The app holds no game logic: keys become `apply_move`/`jump_to` calls
//! and the screen is redrawn from the game's derived view whenever its
//! version changes.

use crossterm::event::KeyCode;
use std::cell::Cell;
use std::rc::Rc;
use strictly_timeline::{DerivedView, GameState, MoveOutcome, Position, StateChange, TuiConfig};
use tracing::{debug, instrument, warn};

use super::input::move_cursor;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the history list.
    History,
}

/// Main application state.
pub struct App {
    game: GameState,
    view: DerivedView,
    seen_version: u64,
    last_change: Rc<Cell<Option<StateChange>>>,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the start of a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        let mut game = GameState::new();
        let last_change = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_change);
        game.subscribe(move |change| sink.set(Some(*change)));

        let view = game.view();
        Self {
            seen_version: game.version(),
            game,
            view,
            last_change,
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// The view to render.
    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the history list.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Whether empty squares show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Most recent change reported by the game.
    pub fn last_change(&self) -> Option<StateChange> {
        self.last_change.get()
    }

    /// Re-derives the view if the game changed since the last sync.
    ///
    /// Returns true when the view was refreshed.
    pub fn sync(&mut self) -> bool {
        let version = self.game.version();
        if version == self.seen_version {
            return false;
        }
        debug!(from = self.seen_version, to = version, "Game changed, refreshing view");
        self.seen_version = version;
        self.view = self.game.view();
        self.history_cursor = self.game.active_step();
        true
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            other => match self.focus {
                Focus::Board => self.handle_board_key(other),
                Focus::History => self.handle_history_key(other),
            },
        }
        self.sync();
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.game.step_count() - 1;
        match key {
            KeyCode::Up => self.history_cursor = self.history_cursor.saturating_sub(1),
            KeyCode::Down => self.history_cursor = (self.history_cursor + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.history_cursor),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.history_cursor = self.game.active_step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn place(&mut self, pos: Position) {
        if let MoveOutcome::Ignored(reason) = self.game.apply_move(pos) {
            debug!(%reason, "Move ignored");
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            warn!(error = %e, "Jump rejected");
        }
    }

    fn step_back(&mut self) {
        let active = self.game.active_step();
        if active > 0 {
            self.jump(active - 1);
        }
    }

    fn step_forward(&mut self) {
        let next = self.game.active_step() + 1;
        if next < self.game.step_count() {
            self.jump(next);
        }
    }
}
