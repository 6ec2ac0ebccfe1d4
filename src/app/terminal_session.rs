use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;

use crate::error::{AppError, AppResult};

/// What the event loop needs from a terminal. Tests swap in a
/// `TestBackend`-based surface.
pub(crate) trait TerminalSurface {
    fn size(&self) -> io::Result<Size>;

    fn clear(&mut self) -> io::Result<()>;

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>);
}

/// Raw mode plus alternate screen with bracketed paste, undone on drop or
/// on panic.
pub(crate) struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    pub(crate) fn enter() -> AppResult<Self> {
        install_restore_hook();
        enable_raw_mode().map_err(|source| context(source, "enable raw mode"))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).map_err(|source| {
            leave_screen(&mut io::stdout());
            context(source, "enter alternate screen")
        })?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|source| {
            leave_screen(&mut io::stdout());
            context(source, "open terminal")
        })?;
        if let Err(source) = terminal.clear() {
            leave_screen(terminal.backend_mut());
            return Err(context(source, "clear terminal"));
        }

        tracing::debug!("terminal session entered");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()
    }
}

impl TerminalSurface for TerminalSession {
    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn context(source: io::Error, action: &str) -> AppError {
    AppError::io_with_context(source, format!("failed to {action}"))
}

fn leave_screen(out: &mut impl Write) {
    let _ = execute!(out, DisableBracketedPaste, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// A panic inside the loop would otherwise leave the shell in raw mode and
/// print the message onto the alternate screen.
fn install_restore_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_screen(&mut io::stdout());
        tracing::error!(%info, "panic");
        previous(info);
    }));
}
