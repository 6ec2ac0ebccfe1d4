use crate::event::AppEvent;

use super::command::{Command, CommandOutcome};
use super::core::{BrowseController, FetchRequest};
use super::state::{PageCursor, ViewKind};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    /// Remote work the caller must start; at most one per command.
    pub fetch: Option<FetchRequest>,
    pub emitted_events: Vec<AppEvent>,
}

pub fn dispatch(controller: &mut BrowseController, cmd: Command) -> CommandDispatchResult {
    let prev_view = controller.view().kind();
    let prev_cursor = controller.cursor();
    let action_id = cmd.action_id();
    controller.status.last_action_id = Some(action_id);

    let (outcome, fetch) = match cmd {
        Command::Search { query } => match controller.search(&query) {
            Some(request) => (CommandOutcome::Applied, Some(request)),
            None => {
                controller.status.message = "empty search ignored".to_string();
                (CommandOutcome::Noop, None)
            }
        },
        Command::BrowsePage { page } => {
            (CommandOutcome::Applied, Some(controller.browse_popular(page)))
        }
        Command::SelectItem { id } => match controller.find_item(&id).cloned() {
            Some(item) => {
                controller.select_item(item);
                (CommandOutcome::Applied, None)
            }
            None => {
                controller.status.message = format!("no listed item with id {id}");
                (CommandOutcome::Noop, None)
            }
        },
        Command::Back => (
            CommandOutcome::Applied,
            Some(controller.return_to_browse()),
        ),
        Command::ToggleSidebar => {
            let visible = controller.toggle_sidebar();
            let state = if visible { "shown" } else { "hidden" };
            controller.status.message = format!("sidebar {state}");
            (CommandOutcome::Applied, None)
        }
        Command::Quit => {
            controller.status.message = "quit requested".to_string();
            (CommandOutcome::QuitRequested, None)
        }
    };

    let mut emitted_events = collect_transition_events(controller, prev_view, prev_cursor);
    if let Some(request) = &fetch {
        emitted_events.push(AppEvent::FetchIssued {
            ticket: request.ticket,
            query: request.query.clone(),
        });
    }
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    CommandDispatchResult {
        outcome,
        fetch,
        emitted_events,
    }
}

fn collect_transition_events(
    controller: &BrowseController,
    prev_view: ViewKind,
    prev_cursor: PageCursor,
) -> Vec<AppEvent> {
    let mut events = Vec::new();
    let view = controller.view().kind();
    if view != prev_view {
        events.push(AppEvent::ViewChanged {
            from: prev_view,
            to: view,
        });
    }

    let cursor = controller.cursor();
    if cursor != prev_cursor {
        events.push(AppEvent::CursorMoved {
            from: prev_cursor.index(),
            to: cursor.index(),
        });
    }
    events
}
