//! Terminal lifecycle, delegated to ratatui's managed setup.
use ratatui::DefaultTerminal;

use crate::error::Result;

pub type AppTerminal = DefaultTerminal;

/// Enter raw mode and the alternate screen.
pub fn setup_terminal() -> Result<AppTerminal> {
    Ok(ratatui::try_init()?)
}

/// Hand the terminal back to the shell, even after a failed event loop.
pub fn restore_terminal() -> Result<()> {
    Ok(ratatui::try_restore()?)
}
