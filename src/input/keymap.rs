use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Focus;
use crate::controller::Command;
use crate::render::PaginationModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

/// What the painted screen currently allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub focus: Focus,
    pub pagination: Option<PaginationModel>,
    pub detail_open: bool,
    pub sidebar_shown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    MoveSelection(isize),
    Activate,
    FocusSearch,
    LeaveSearch,
    CycleFocus,
    SubmitSearch,
    EditInput,
}

pub fn map_key(key: KeyEvent, ctx: &KeyContext) -> Option<KeyAction> {
    map_key_with_preset(key, ctx, KeymapPreset::Default)
}

pub fn map_key_with_preset(
    key: KeyEvent,
    ctx: &KeyContext,
    preset: KeymapPreset,
) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Command(Command::Quit));
    }

    if preset == KeymapPreset::Emacs
        && let Some(action) = map_emacs_key(key, ctx)
    {
        return Some(action);
    }

    match ctx.focus {
        Focus::Search => map_search_key(key),
        Focus::Results | Focus::Sidebar => map_browse_key(key, ctx),
    }
}

fn map_search_key(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Enter => Some(KeyAction::SubmitSearch),
        KeyCode::Esc => Some(KeyAction::LeaveSearch),
        KeyCode::Tab => Some(KeyAction::CycleFocus),
        _ => Some(KeyAction::EditInput),
    }
}

fn map_browse_key(key: KeyEvent, ctx: &KeyContext) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(KeyAction::MoveSelection(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(KeyAction::MoveSelection(-1)),
        KeyCode::PageDown => Some(KeyAction::MoveSelection(10)),
        KeyCode::PageUp => Some(KeyAction::MoveSelection(-10)),
        KeyCode::Enter => Some(KeyAction::Activate),
        KeyCode::Char('n') | KeyCode::Right => next_page_command(ctx),
        KeyCode::Char('p') | KeyCode::Left => prev_page_command(ctx),
        KeyCode::Char('b') | KeyCode::Backspace if ctx.detail_open => {
            Some(KeyAction::Command(Command::Back))
        }
        KeyCode::Char('/') => Some(KeyAction::FocusSearch),
        KeyCode::Tab => Some(KeyAction::CycleFocus),
        KeyCode::Char('s') => Some(KeyAction::Command(Command::ToggleSidebar)),
        KeyCode::Char('q') => Some(KeyAction::Command(Command::Quit)),
        _ => None,
    }
}

fn map_emacs_key(key: KeyEvent, ctx: &KeyContext) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') if ctx.focus != Focus::Search => Some(KeyAction::MoveSelection(1)),
            KeyCode::Char('p') if ctx.focus != Focus::Search => {
                Some(KeyAction::MoveSelection(-1))
            }
            KeyCode::Char('s') => Some(KeyAction::FocusSearch),
            KeyCode::Char('g') if ctx.focus == Focus::Search => Some(KeyAction::LeaveSearch),
            KeyCode::Char('q') => Some(KeyAction::Command(Command::Quit)),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) && ctx.focus != Focus::Search {
        return match key.code {
            KeyCode::Char('v') => Some(KeyAction::MoveSelection(-10)),
            _ => None,
        };
    }
    None
}

/// Only emitted while the control is shown and enabled.
fn next_page_command(ctx: &KeyContext) -> Option<KeyAction> {
    let pagination = ctx.pagination.filter(|pagination| pagination.next_enabled)?;
    Some(KeyAction::Command(Command::BrowsePage {
        page: pagination.page_number,
    }))
}

fn prev_page_command(ctx: &KeyContext) -> Option<KeyAction> {
    let pagination = ctx.pagination.filter(|pagination| pagination.prev_enabled)?;
    Some(KeyAction::Command(Command::BrowsePage {
        page: pagination.page_number.checked_sub(2)?,
    }))
}
