//! Display models: what to paint, independent of any UI technology.

use crate::catalog::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Image(String),
    Placeholder,
}

impl Thumbnail {
    pub fn from_url(url: Option<&str>) -> Self {
        match url {
            Some(url) => Self::Image(url.to_string()),
            None => Self::Placeholder,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Image(url) => Some(url),
            Self::Placeholder => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: ItemId,
    pub thumbnail: Thumbnail,
    pub title: String,
    pub rank_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModel {
    pub id: ItemId,
    pub poster: Thumbnail,
    pub title: String,
    pub status: String,
    pub chapters: String,
    pub rank: String,
    pub synopsis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationModel {
    /// 1-based.
    pub page_number: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainPanelModel {
    Loading {
        title: String,
        message: String,
    },
    Results {
        title: String,
        cards: Vec<CardModel>,
        pagination: Option<PaginationModel>,
    },
    NoResults {
        message: String,
    },
    Detail(DetailModel),
    Error {
        message: String,
    },
}

impl MainPanelModel {
    pub fn pagination(&self) -> Option<PaginationModel> {
        match self {
            Self::Results { pagination, .. } => *pagination,
            _ => None,
        }
    }

    pub fn cards(&self) -> &[CardModel] {
        match self {
            Self::Results { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntryModel {
    pub id: ItemId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarModel {
    Loading { message: String },
    Entries(Vec<SidebarEntryModel>),
    Error { message: String },
}

impl SidebarModel {
    pub fn entries(&self) -> &[SidebarEntryModel] {
        match self {
            Self::Entries(entries) => entries,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub main: MainPanelModel,
    /// `None` while the sidebar is toggled off.
    pub sidebar: Option<SidebarModel>,
}
