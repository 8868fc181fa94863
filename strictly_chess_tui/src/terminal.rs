//! Terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument};

/// Concrete terminal type used by the UI.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns raw mode, the alternate screen and mouse capture. Restores the
/// terminal on drop, including on error paths.
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    /// Switches the terminal into UI mode.
    #[instrument]
    pub fn new() -> Result<Self> {
        let terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;
        let mut guard = Self { terminal };

        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(
            guard.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture
        )
        .context("Failed to enter alternate screen")?;
        debug!("Terminal in UI mode");
        Ok(guard)
    }

    /// The wrapped terminal.
    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
