use crossterm::event::{Event, KeyEventKind};
use tui_input::InputRequest;

use crate::app::terminal_session::TerminalSurface;
use crate::app::{App, Focus};
use crate::controller::Command;
use crate::error::AppResult;

#[derive(Debug, Default)]
pub(crate) struct InputEventOutcome {
    pub(crate) command: Option<Command>,
}

impl InputEventOutcome {
    fn command(command: Option<Command>) -> Self {
        Self { command }
    }
}

impl App {
    /// Routes one terminal event. Key presses may yield a controller command;
    /// everything else only touches front-end state.
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        session: &mut impl TerminalSurface,
        needs_redraw: &mut bool,
    ) -> AppResult<InputEventOutcome> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                let outcome = self.handle_key_event(key);
                *needs_redraw |= outcome.redraw;
                Ok(InputEventOutcome::command(outcome.command))
            }
            Event::Paste(text) => {
                self.paste_into_search(&text);
                *needs_redraw = true;
                Ok(InputEventOutcome::default())
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                session.clear()?;
                *needs_redraw = true;
                Ok(InputEventOutcome::default())
            }
            Event::FocusGained => {
                *needs_redraw = true;
                Ok(InputEventOutcome::default())
            }
            _ => Ok(InputEventOutcome::default()),
        }
    }

    /// Pasted text always lands in the search bar, newlines flattened.
    fn paste_into_search(&mut self, text: &str) {
        self.ui.focus = Focus::Search;
        for ch in text.chars() {
            let ch = if ch.is_control() { ' ' } else { ch };
            self.ui.search_input.handle(InputRequest::InsertChar(ch));
        }
    }
}
