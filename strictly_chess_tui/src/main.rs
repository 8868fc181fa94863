//! Terminal UI for Strictly Chess

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod layout;
mod terminal;
mod ui;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::path::Path;
use strictly_chess::{BoardConfig, BoardController};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use terminal::{TerminalGuard, Tui};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    info!("Starting Strictly Chess TUI");

    let board = build_board(&cli)?;
    let mut app = App::new(board);

    let mut guard = TerminalGuard::new()?;
    let result = run(guard.terminal(), &mut app);
    drop(guard);

    if let Err(err) = &result {
        error!(error = ?err, "UI loop error");
    }
    info!("Strictly Chess TUI stopped");
    result
}

/// Logs go to a file so they never corrupt the terminal UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}

#[instrument(skip(cli))]
fn build_board(cli: &Cli) -> Result<BoardController> {
    let config = match &cli.config {
        Some(path) => BoardConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let config = if cli.flip {
        let flipped = config.orientation().flip();
        config.with_orientation(flipped)
    } else {
        config
    };

    match &cli.fen {
        Some(fen) => BoardController::from_fen(fen, config).context("Invalid --fen position"),
        None => Ok(BoardController::with_config(config)),
    }
}

/// Synchronous draw/read loop.
#[instrument(skip_all)]
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
}
