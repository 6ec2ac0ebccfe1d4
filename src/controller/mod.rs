mod command;
mod core;
mod dispatch;
mod sidebar;
mod state;

pub use command::{ActionId, Command, CommandOutcome};
pub use core::{BrowseController, FetchCompletion, FetchRequest, ResultsTarget};
pub use dispatch::{CommandDispatchResult, dispatch};
pub use sidebar::{TOP_LIST_SIZE, TopListPlan, load_top_list};
pub use state::{
    FETCH_ERROR_MESSAGE, LOADING_MESSAGE, PageCursor, RankedItem, SEARCH_RESULTS_TITLE,
    SIDEBAR_ERROR_MESSAGE, SidebarState, StatusState, TopList, ViewKind, ViewState,
    popular_title,
};
