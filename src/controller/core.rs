use crate::catalog::{CatalogItem, CatalogQuery, ItemId};
use crate::error::FetchResult;

use super::command::{ActionId, CommandOutcome};
use super::sidebar::TopListPlan;
use super::state::{
    FETCH_ERROR_MESSAGE, PageCursor, SEARCH_RESULTS_TITLE, SIDEBAR_ERROR_MESSAGE, SidebarState,
    StatusState, TopList, ViewState, popular_title,
};

/// The list view a pending fetch will populate once it settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsTarget {
    pub title: String,
    pub paginated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: u64,
    pub query: CatalogQuery,
    pub target: ResultsTarget,
}

#[derive(Debug)]
pub struct FetchCompletion {
    pub request: FetchRequest,
    pub result: FetchResult<Vec<CatalogItem>>,
}

/// Owns everything that decides what is on screen: the view, the browse
/// cursor and the sidebar list.
#[derive(Debug, Clone)]
pub struct BrowseController {
    view: ViewState,
    cursor: PageCursor,
    sidebar: SidebarState,
    sidebar_visible: bool,
    pub status: StatusState,
    issued_tickets: u64,
}

impl Default for BrowseController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BrowseController {
    pub fn new(sidebar_visible: bool) -> Self {
        Self {
            view: ViewState::default(),
            cursor: PageCursor::default(),
            sidebar: SidebarState::default(),
            sidebar_visible,
            status: StatusState::default(),
            issued_tickets: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Starts a fresh browse session at page 0 and kicks off the sidebar.
    pub fn start(&mut self) -> (FetchRequest, TopListPlan) {
        self.status.last_action_id = Some(ActionId::Startup);
        let request = self.browse_popular(0);
        let plan = self.begin_sidebar_load();
        (request, plan)
    }

    /// Returns `None` without touching any state when the trimmed query is
    /// empty.
    pub fn search(&mut self, raw_query: &str) -> Option<FetchRequest> {
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }

        self.status.message = format!("searching for \"{query}\"");
        Some(self.issue(
            CatalogQuery::text(query),
            ResultsTarget {
                title: SEARCH_RESULTS_TITLE.to_string(),
                paginated: false,
            },
        ))
    }

    pub fn browse_popular(&mut self, page: usize) -> FetchRequest {
        self.cursor = PageCursor::new(page);
        self.status.message = format!("loading popular page {}", page.saturating_add(1));
        self.issue(
            CatalogQuery::popular_page(page),
            ResultsTarget {
                title: popular_title(page),
                paginated: true,
            },
        )
    }

    pub fn select_item(&mut self, item: CatalogItem) {
        self.status.message = format!("showing {}", item.title);
        tracing::info!(id = %item.id, title = %item.title, "detail view");
        self.view = ViewState::Detail { item };
    }

    /// Always re-fetches the page under the cursor; the previous grid is not
    /// kept around.
    pub fn return_to_browse(&mut self) -> FetchRequest {
        self.browse_popular(self.cursor.index())
    }

    /// Looks in the current result list first, then the sidebar.
    pub fn find_item(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.view
            .listed_items()
            .iter()
            .find(|item| &item.id == id)
            .or_else(|| match &self.sidebar {
                SidebarState::Ready(list) => list.find(id),
                _ => None,
            })
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_visible = !self.sidebar_visible;
        self.sidebar_visible
    }

    /// Applies a settled fetch. Completions are applied in arrival order, so
    /// a slow earlier request can overwrite a newer one.
    pub fn complete_fetch(&mut self, completion: FetchCompletion) -> CommandOutcome {
        let FetchCompletion { request, result } = completion;
        if request.ticket != self.issued_tickets {
            tracing::debug!(
                ticket = request.ticket,
                latest = self.issued_tickets,
                "applying out-of-order fetch result"
            );
        }

        match result {
            Ok(items) => {
                self.status.last_action_id = Some(ActionId::FetchComplete);
                self.status.message = if items.is_empty() {
                    "no results".to_string()
                } else {
                    format!("{} items", items.len())
                };
                tracing::info!(
                    ticket = request.ticket,
                    title = %request.target.title,
                    items = items.len(),
                    "results loaded"
                );
                self.view = ViewState::ResultsList {
                    items,
                    title: request.target.title,
                    paginated: request.target.paginated,
                };
            }
            Err(err) => {
                self.status.last_action_id = Some(ActionId::FetchFailed);
                self.status.message = FETCH_ERROR_MESSAGE.to_string();
                tracing::error!(
                    ticket = request.ticket,
                    kind = err.kind().as_str(),
                    error = ?err,
                    "catalog fetch failed"
                );
                self.view = ViewState::Error {
                    message: FETCH_ERROR_MESSAGE.to_string(),
                };
            }
        }
        CommandOutcome::Applied
    }

    pub fn begin_sidebar_load(&mut self) -> TopListPlan {
        self.sidebar = SidebarState::Loading;
        TopListPlan::default()
    }

    pub fn complete_sidebar(&mut self, result: FetchResult<TopList>) -> CommandOutcome {
        match result {
            Ok(list) => {
                self.status.last_action_id = Some(ActionId::SidebarLoaded);
                tracing::info!(entries = list.len(), "top list loaded");
                self.sidebar = SidebarState::Ready(list);
            }
            Err(err) => {
                self.status.last_action_id = Some(ActionId::SidebarFailed);
                tracing::error!(
                    kind = err.kind().as_str(),
                    error = ?err,
                    "failed to load top list"
                );
                self.sidebar = SidebarState::Failed {
                    message: SIDEBAR_ERROR_MESSAGE.to_string(),
                };
            }
        }
        CommandOutcome::Applied
    }

    fn issue(&mut self, query: CatalogQuery, target: ResultsTarget) -> FetchRequest {
        self.issued_tickets = self.issued_tickets.saturating_add(1);
        tracing::info!(
            ticket = self.issued_tickets,
            title = %target.title,
            query = ?query,
            "fetch issued"
        );
        self.view = ViewState::Loading {
            title: target.title.clone(),
        };
        FetchRequest {
            ticket: self.issued_tickets,
            query,
            target,
        }
    }
}
