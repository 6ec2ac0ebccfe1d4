use crate::catalog::CatalogItem;
use crate::controller::{
    BrowseController, LOADING_MESSAGE, PageCursor, SidebarState, ViewState,
};

use super::models::{
    CardModel, DetailModel, MainPanelModel, PaginationModel, ScreenModel, SidebarEntryModel,
    SidebarModel, Thumbnail,
};

pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const NO_SYNOPSIS_MESSAGE: &str = "No synopsis available.";
const UNKNOWN: &str = "?";

pub fn render_grid(items: &[CatalogItem]) -> Vec<CardModel> {
    items
        .iter()
        .map(|item| CardModel {
            id: item.id.clone(),
            thumbnail: Thumbnail::from_url(item.small_poster()),
            title: item.title.clone(),
            rank_label: format!("Rank #{}", rank_text(item)),
        })
        .collect()
}

pub fn render_detail(item: &CatalogItem) -> DetailModel {
    let synopsis = item
        .synopsis
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_SYNOPSIS_MESSAGE);

    DetailModel {
        id: item.id.clone(),
        poster: Thumbnail::from_url(item.large_poster()),
        title: item.title.clone(),
        status: item.status.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        chapters: item
            .chapter_count
            .filter(|count| *count > 0)
            .map(|count| count.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        rank: rank_text(item),
        synopsis: synopsis.to_string(),
    }
}

/// There is no known last page, so "next" is never disabled.
pub fn render_pagination(cursor: PageCursor) -> PaginationModel {
    PaginationModel {
        page_number: cursor.index().saturating_add(1),
        prev_enabled: cursor.has_prev(),
        next_enabled: true,
    }
}

pub fn render_main(view: &ViewState, cursor: PageCursor) -> MainPanelModel {
    match view {
        ViewState::Loading { title } => MainPanelModel::Loading {
            title: title.clone(),
            message: LOADING_MESSAGE.to_string(),
        },
        ViewState::ResultsList { items, .. } if items.is_empty() => MainPanelModel::NoResults {
            message: NO_RESULTS_MESSAGE.to_string(),
        },
        ViewState::ResultsList {
            items,
            title,
            paginated,
        } => MainPanelModel::Results {
            title: title.clone(),
            cards: render_grid(items),
            pagination: (*paginated).then(|| render_pagination(cursor)),
        },
        ViewState::Detail { item } => MainPanelModel::Detail(render_detail(item)),
        ViewState::Error { message } => MainPanelModel::Error {
            message: message.clone(),
        },
    }
}

pub fn render_sidebar(sidebar: &SidebarState) -> SidebarModel {
    match sidebar {
        SidebarState::Loading => SidebarModel::Loading {
            message: LOADING_MESSAGE.to_string(),
        },
        SidebarState::Ready(list) => SidebarModel::Entries(
            list.entries()
                .iter()
                .map(|entry| SidebarEntryModel {
                    id: entry.item.id.clone(),
                    label: format!("{}. {}", entry.rank, entry.item.title),
                })
                .collect(),
        ),
        SidebarState::Failed { message } => SidebarModel::Error {
            message: message.clone(),
        },
    }
}

pub fn render_screen(controller: &BrowseController) -> ScreenModel {
    ScreenModel {
        main: render_main(controller.view(), controller.cursor()),
        sidebar: controller
            .sidebar_visible()
            .then(|| render_sidebar(controller.sidebar())),
    }
}

fn rank_text(item: &CatalogItem) -> String {
    item.popularity_rank
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
