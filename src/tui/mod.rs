//! Terminal UI for Strictly Timeline.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_timeline::TuiConfig;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive terminal until the user quits.
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Timeline TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "TUI exited with error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut dirty = true;
    loop {
        dirty |= app.sync();
        if dirty {
            terminal.draw(|f| ui::draw(f, app))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code);
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
