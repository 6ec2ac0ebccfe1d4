use crate::catalog::{CatalogItem, ItemId, PAGE_SIZE};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const SEARCH_RESULTS_TITLE: &str = "Search Results";
pub const FETCH_ERROR_MESSAGE: &str = "Error loading manga.";
pub const SIDEBAR_ERROR_MESSAGE: &str = "Error loading list";

pub fn popular_title(page: usize) -> String {
    format!("Popular Manga (Page {})", page.saturating_add(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Loading,
    ResultsList,
    Detail,
    Error,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::ResultsList => "results",
            Self::Detail => "detail",
            Self::Error => "error",
        }
    }
}

/// What the main panel shows. Exactly one variant is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading {
        title: String,
    },
    ResultsList {
        items: Vec<CatalogItem>,
        title: String,
        paginated: bool,
    },
    Detail {
        item: CatalogItem,
    },
    Error {
        message: String,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Loading {
            title: popular_title(0),
        }
    }
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Loading { .. } => ViewKind::Loading,
            Self::ResultsList { .. } => ViewKind::ResultsList,
            Self::Detail { .. } => ViewKind::Detail,
            Self::Error { .. } => ViewKind::Error,
        }
    }

    pub fn listed_items(&self) -> &[CatalogItem] {
        match self {
            Self::ResultsList { items, .. } => items,
            _ => &[],
        }
    }
}

/// Zero-based page index of the popular browse view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
}

impl PageCursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn offset(self) -> usize {
        self.index.saturating_mul(PAGE_SIZE)
    }

    pub fn has_prev(self) -> bool {
        self.index > 0
    }

    pub fn prev(self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    pub fn next(self) -> usize {
        self.index.saturating_add(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem {
    /// 1-based position in the list.
    pub rank: usize,
    pub item: CatalogItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopList {
    entries: Vec<RankedItem>,
}

impl TopList {
    /// Keeps fetch order, truncates to `limit`, and ranks by position.
    pub fn from_items(items: Vec<CatalogItem>, limit: usize) -> Self {
        let entries = items
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, item)| RankedItem {
                rank: index + 1,
                item,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.entries
            .iter()
            .map(|entry| &entry.item)
            .find(|item| &item.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Loading,
    Ready(TopList),
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<super::ActionId>,
}
