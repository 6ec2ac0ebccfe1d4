use crate::catalog::{CatalogQuery, CatalogSource, PAGE_SIZE};
use crate::error::FetchResult;

use super::state::TopList;

pub const TOP_LIST_SIZE: usize = 100;

/// Shape of the startup top-list aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopListPlan {
    pub total: usize,
    pub page_size: usize,
}

impl Default for TopListPlan {
    fn default() -> Self {
        Self {
            total: TOP_LIST_SIZE,
            page_size: PAGE_SIZE,
        }
    }
}

impl TopListPlan {
    pub fn page_count(self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}

/// Fetches the popular pages one after another, in page order, and ranks the
/// concatenation. The first failed page aborts the whole load.
pub async fn load_top_list(source: &dyn CatalogSource, plan: TopListPlan) -> FetchResult<TopList> {
    let mut items = Vec::with_capacity(plan.total);
    for page in 0..plan.page_count() {
        let query = CatalogQuery::popular_page(page);
        let fetched = source.fetch(&query).await?;
        tracing::debug!(page, items = fetched.len(), "top list page fetched");
        items.extend(fetched);
    }
    Ok(TopList::from_items(items, plan.total))
}
