use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::AppResult;

mod client;
mod query;
mod types;
mod wire;

pub use client::KitsuClient;
pub use query::{CatalogQuery, PAGE_SIZE, SortKey};
pub use types::{CatalogItem, CatalogSource, ItemId, PosterImage};
pub use wire::parse_item_list;

pub fn open_default_source(config: &ApiConfig) -> AppResult<Arc<dyn CatalogSource>> {
    KitsuClient::from_config(config).map(|client| Arc::new(client) as Arc<dyn CatalogSource>)
}
