//! Command-line interface for strictly_chess_tui.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Chess - interactive chessboard in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_chess_tui")]
#[command(about = "Interactive chessboard with history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start from this position instead of the standard one
    #[arg(long)]
    pub fen: Option<String>,

    /// Start with Black at the bottom
    #[arg(long)]
    pub flip: bool,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "strictly_chess_tui.log")]
    pub log_file: PathBuf,
}
