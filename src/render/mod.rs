mod build;
mod models;

pub use build::{
    NO_RESULTS_MESSAGE, NO_SYNOPSIS_MESSAGE, render_detail, render_grid, render_main,
    render_pagination, render_screen, render_sidebar,
};
pub use models::{
    CardModel, DetailModel, MainPanelModel, PaginationModel, ScreenModel, SidebarEntryModel,
    SidebarModel, Thumbnail,
};
