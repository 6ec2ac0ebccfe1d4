use crossterm::event::{Event, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::controller::Command;
use crate::input::{KeyAction, KeyContext, KeymapPreset, map_key_with_preset};

use super::core::App;
use super::state::Focus;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct KeyEventOutcome {
    pub redraw: bool,
    pub command: Option<Command>,
}

impl App {
    pub(crate) fn key_context(&self) -> KeyContext {
        let screen = self.screen();
        KeyContext {
            focus: self.ui.focus,
            pagination: screen.main.pagination(),
            detail_open: screen.main.is_detail(),
            sidebar_shown: screen.sidebar.is_some(),
        }
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> KeyEventOutcome {
        let ctx = self.key_context();
        let preset = KeymapPreset::parse(&self.config.keymap.preset);
        let Some(action) = map_key_with_preset(key, &ctx, preset) else {
            return KeyEventOutcome::default();
        };

        match action {
            KeyAction::Command(command) => KeyEventOutcome {
                redraw: false,
                command: Some(command),
            },
            KeyAction::MoveSelection(delta) => {
                let screen = self.screen();
                self.ui.move_selection(delta, &screen);
                redraw_only()
            }
            KeyAction::Activate => KeyEventOutcome {
                redraw: false,
                command: self.selected_item_command(),
            },
            KeyAction::FocusSearch => {
                self.ui.focus = Focus::Search;
                redraw_only()
            }
            KeyAction::LeaveSearch => {
                self.ui.focus = Focus::Results;
                redraw_only()
            }
            KeyAction::CycleFocus => {
                self.ui.cycle_focus(ctx.sidebar_shown);
                redraw_only()
            }
            KeyAction::SubmitSearch => {
                let query = self.ui.search_input.value().to_string();
                if !query.trim().is_empty() {
                    self.ui.focus = Focus::Results;
                }
                KeyEventOutcome {
                    redraw: true,
                    command: Some(Command::Search { query }),
                }
            }
            KeyAction::EditInput => {
                let changed = self.ui.search_input.handle_event(&Event::Key(key));
                KeyEventOutcome {
                    redraw: changed.is_some(),
                    command: None,
                }
            }
        }
    }

    fn selected_item_command(&self) -> Option<Command> {
        let screen = self.screen();
        let id = match self.ui.focus {
            Focus::Results => screen
                .main
                .cards()
                .get(self.ui.selected_card)
                .map(|card| card.id.clone()),
            Focus::Sidebar => screen
                .sidebar
                .as_ref()
                .and_then(|sidebar| sidebar.entries().get(self.ui.selected_entry))
                .map(|entry| entry.id.clone()),
            Focus::Search => None,
        }?;
        Some(Command::SelectItem { id })
    }
}

fn redraw_only() -> KeyEventOutcome {
    KeyEventOutcome {
        redraw: true,
        command: None,
    }
}
