//! Strictly Timeline - Unified CLI
//!
//! Interactive terminal play or headless replay of a move list.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::{Cli, Command};
use strictly_timeline::{DerivedView, GameState, MoveOutcome, Position, TuiConfig};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = TuiConfig::load_or_default(&config)?;
            tui::run(&config)
        }
        Command::Replay { moves, jump, json } => run_replay(&moves, jump, json),
    }
}

/// Apply moves without a terminal UI and print the derived view.
#[instrument]
fn run_replay(moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut game = GameState::new();
    for raw in moves {
        let position = Position::from_label_or_number(raw)
            .ok_or_else(|| anyhow!("Unknown position: {}", raw))?;
        if let MoveOutcome::Ignored(reason) = game.apply_move(position) {
            warn!(%reason, input = %raw, "Move ignored");
        }
    }

    if let Some(step) = jump {
        game.jump_to(step)?;
    }

    let view = game.view();
    info!(active_step = view.active_step(), status = %view.status(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

/// Plain-text rendering: board, status line and move list.
fn render_text(view: &DerivedView) -> String {
    let mut out = format!("{}\n\n{}\n\n", view.board().display(), view.status());
    for entry in view.moves() {
        let marker = if *entry.active() { '>' } else { ' ' };
        out.push_str(&format!("{} {}", marker, entry.label()));
        if let Some(mov) = entry.played() {
            out.push_str(&format!("  ({})", mov));
        }
        out.push('\n');
    }
    out
}
