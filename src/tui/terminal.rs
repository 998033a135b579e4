//! Raw-mode terminal management.
//!
//! Wraps [`ratatui::Terminal`] over a crossterm backend and keeps the user's
//! shell usable: alternate screen and raw mode are restored on exit and on
//! panic.

use std::io::{Stdout, stdout};

use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Terminal wrapper owning raw mode and the alternate screen.
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

/// Best-effort restoration, shared by [`Tui::exit`] and the panic hook.
fn restore() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().execute(crossterm::cursor::Show);
}

impl Tui {
    pub fn new() -> anyhow::Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    /// Enter raw mode and the alternate screen. The panic hook is installed
    /// first so the terminal is restored before panic output is printed.
    pub fn init(&mut self) -> anyhow::Result<()> {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Leave the alternate screen and give the terminal back.
    pub fn exit(&mut self) -> anyhow::Result<()> {
        restore();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
