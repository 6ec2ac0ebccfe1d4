use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SEARCH_BAR_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 34;
const MIN_MAIN_WIDTH: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub search: Rect,
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect, sidebar_visible: bool) -> UiLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let body = rows[1];
    // Narrow terminals drop the sidebar rather than squeezing the grid.
    let fits_sidebar = body.width >= SIDEBAR_WIDTH + MIN_MAIN_WIDTH;
    let (sidebar, main) = if sidebar_visible && fits_sidebar {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(body);
        (Some(columns[0]), columns[1])
    } else {
        (None, body)
    };

    UiLayout {
        search: rows[0],
        sidebar,
        main,
        status: rows[2],
    }
}
