use crossterm::event::Event;

use crate::catalog::CatalogQuery;
use crate::controller::{ActionId, Command, CommandOutcome, FetchCompletion, TopList, ViewKind};
use crate::error::FetchResult;

/// Facts about a command that has already been applied. Only logged today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    ViewChanged {
        from: ViewKind,
        to: ViewKind,
    },
    /// Browse cursor page indices, 0-based.
    CursorMoved {
        from: usize,
        to: usize,
    },
    FetchIssued {
        ticket: u64,
        query: CatalogQuery,
    },
}

/// Everything the event loop reacts to, funnelled through one queue.
#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    FetchComplete(FetchCompletion),
    SidebarLoaded(FetchResult<TopList>),
}
