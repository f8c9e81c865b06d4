//! Terminal guard: Raw mode, alternate screen and mouse capture.

use super::config::ShellConfig;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Puts the terminal into editor mode and restores it on drop.
#[derive(Debug)]
pub struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enter raw mode, capture the mouse and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails. Anything already switched
    /// on is switched back off before returning.
    pub fn enter(config: &ShellConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on Drop undoes whatever partial setup happened.
        let guard = Self {
            alternate_screen: config.alternate_screen,
        };

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, EnableMouseCapture, cursor::Hide)?;
        Ok(guard)
    }

    /// Current terminal size as (columns, rows).
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, DisableMouseCapture);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
