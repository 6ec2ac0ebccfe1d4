use std::fmt;

use futures_util::future::BoxFuture;

use crate::error::FetchResult;

use super::query::CatalogQuery;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosterImage {
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub poster: Option<PosterImage>,
    /// 1-based; absent for unranked entries.
    pub popularity_rank: Option<u32>,
    pub status: Option<String>,
    pub chapter_count: Option<u32>,
    pub synopsis: Option<String>,
}

impl CatalogItem {
    pub fn small_poster(&self) -> Option<&str> {
        self.poster
            .as_ref()
            .and_then(|poster| poster.small.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn large_poster(&self) -> Option<&str> {
        self.poster
            .as_ref()
            .and_then(|poster| poster.large.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Anything that can answer a [`CatalogQuery`].
///
/// Implementations perform exactly one remote call per `fetch` and never
/// retry.
pub trait CatalogSource: Send + Sync {
    fn fetch<'a>(&'a self, query: &'a CatalogQuery) -> BoxFuture<'a, FetchResult<Vec<CatalogItem>>>;
}
