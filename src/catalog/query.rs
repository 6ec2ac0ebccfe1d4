/// Kitsu refuses larger pages.
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PopularityRank,
}

impl SortKey {
    pub fn as_param(self) -> &'static str {
        match self {
            Self::PopularityRank => "popularityRank",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    Text {
        text: String,
    },
    Page {
        page: usize,
        limit: usize,
        sort: SortKey,
    },
}

impl CatalogQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn popular_page(page: usize) -> Self {
        Self::Page {
            page,
            limit: PAGE_SIZE,
            sort: SortKey::PopularityRank,
        }
    }

    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Text { .. } => None,
            Self::Page { page, limit, .. } => Some(page.saturating_mul(*limit)),
        }
    }

    pub fn to_url(&self, base_url: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        match self {
            Self::Text { text } => {
                format!("{base_url}/manga?filter[text]={}", urlencoding::encode(text))
            }
            Self::Page { limit, sort, .. } => format!(
                "{base_url}/manga?sort={}&page[limit]={limit}&page[offset]={}",
                sort.as_param(),
                self.offset().unwrap_or(0)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogQuery, PAGE_SIZE};

    const BASE: &str = "https://kitsu.io/api/edge";

    fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn text_query_round_trips_through_percent_encoding() {
        for raw in ["Naruto", "one piece", "Ao no Exorcist & co?", "進撃の巨人", "100%"] {
            let url = CatalogQuery::text(raw).to_url(BASE);
            let encoded = query_param(&url, "filter[text]").expect("text param present");
            assert!(!encoded.contains(' '));
            let decoded = urlencoding::decode(encoded).expect("valid utf-8");
            assert_eq!(decoded, raw);
        }
    }

    #[test]
    fn popular_page_requests_fixed_limit_and_scaled_offset() {
        for page in [0usize, 1, 4, 37] {
            let url = CatalogQuery::popular_page(page).to_url(BASE);
            assert!(url.starts_with("https://kitsu.io/api/edge/manga?"));
            assert_eq!(query_param(&url, "sort"), Some("popularityRank"));
            assert_eq!(query_param(&url, "page[limit]"), Some("20"));
            let offset = (page * PAGE_SIZE).to_string();
            assert_eq!(query_param(&url, "page[offset]"), Some(offset.as_str()));
        }
    }

    #[test]
    fn to_url_tolerates_trailing_slash_in_base() {
        let url = CatalogQuery::popular_page(1).to_url("http://localhost:9000/api/");
        assert_eq!(
            url,
            "http://localhost:9000/api/manga?sort=popularityRank&page[limit]=20&page[offset]=20"
        );
    }
}
