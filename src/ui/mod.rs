use ratatui::Frame;

use crate::app::{Focus, UiState};
use crate::controller::StatusState;
use crate::render::ScreenModel;

mod chrome;
mod layout;
mod panels;

pub use chrome::{draw_search_bar, draw_status};
pub use layout::{UiLayout, split_layout};
pub use panels::{draw_main, draw_sidebar};

pub fn draw_screen(
    frame: &mut Frame<'_>,
    screen: &ScreenModel,
    ui: &UiState,
    status: &StatusState,
) {
    let layout = split_layout(frame.area(), screen.sidebar.is_some());

    draw_search_bar(frame, layout.search, &ui.search_input, ui.focus == Focus::Search);
    if let (Some(area), Some(sidebar)) = (layout.sidebar, screen.sidebar.as_ref()) {
        draw_sidebar(
            frame,
            area,
            sidebar,
            ui.selected_entry,
            ui.focus == Focus::Sidebar,
        );
    }
    draw_main(
        frame,
        layout.main,
        &screen.main,
        ui.selected_card,
        ui.focus == Focus::Results,
    );
    draw_status(frame, layout.status, status, ui.focus);
}
