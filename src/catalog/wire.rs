//! JSON:API response shapes consumed from the catalog service.

use serde::Deserialize;

use crate::error::{FetchError, FetchResult};

use super::types::{CatalogItem, ItemId, PosterImage};

#[derive(Debug, Deserialize)]
struct ListDocument {
    #[serde(default)]
    data: Option<Vec<ResourceObject>>,
}

#[derive(Debug, Deserialize)]
struct ResourceObject {
    id: ResourceId,
    attributes: MangaAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResourceId {
    Text(String),
    Number(u64),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MangaAttributes {
    canonical_title: Option<String>,
    poster_image: Option<PosterAttributes>,
    popularity_rank: Option<u32>,
    status: Option<String>,
    chapter_count: Option<u32>,
    synopsis: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PosterAttributes {
    small: Option<String>,
    large: Option<String>,
}

/// Decodes a list response body. A missing or null `data` member is an
/// empty result, not an error.
pub fn parse_item_list(url: &str, body: &[u8]) -> FetchResult<Vec<CatalogItem>> {
    let document = serde_json::from_slice::<ListDocument>(body)
        .map_err(|source| FetchError::malformed(url, source))?;
    Ok(document
        .data
        .unwrap_or_default()
        .into_iter()
        .map(CatalogItem::from)
        .collect())
}

impl From<ResourceObject> for CatalogItem {
    fn from(resource: ResourceObject) -> Self {
        let id = match resource.id {
            ResourceId::Text(id) => ItemId::new(id),
            ResourceId::Number(id) => ItemId::new(id.to_string()),
        };
        let attrs = resource.attributes;
        Self {
            id,
            title: attrs.canonical_title.unwrap_or_default(),
            poster: attrs.poster_image.map(|poster| PosterImage {
                small: poster.small,
                large: poster.large,
            }),
            popularity_rank: attrs.popularity_rank.filter(|rank| *rank >= 1),
            status: attrs.status.filter(|status| !status.is_empty()),
            chapter_count: attrs.chapter_count,
            synopsis: attrs.synopsis,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FetchError;

    use super::parse_item_list;

    const URL: &str = "https://kitsu.io/api/edge/manga";

    #[test]
    fn parse_item_list_maps_attributes() {
        let body = br#"{
            "data": [{
                "id": "13",
                "type": "manga",
                "attributes": {
                    "canonicalTitle": "One Piece",
                    "posterImage": {"small": "s.jpg", "large": "l.jpg", "tiny": "t.jpg"},
                    "popularityRank": 2,
                    "status": "current",
                    "chapterCount": null,
                    "synopsis": "Pirates."
                }
            }],
            "meta": {"count": 1}
        }"#;

        let items = parse_item_list(URL, body).expect("body should parse");
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id.as_str(), "13");
        assert_eq!(item.title, "One Piece");
        assert_eq!(item.small_poster(), Some("s.jpg"));
        assert_eq!(item.large_poster(), Some("l.jpg"));
        assert_eq!(item.popularity_rank, Some(2));
        assert_eq!(item.status.as_deref(), Some("current"));
        assert_eq!(item.chapter_count, None);
        assert_eq!(item.synopsis.as_deref(), Some("Pirates."));
    }

    #[test]
    fn parse_item_list_treats_missing_or_empty_data_as_empty() {
        assert!(parse_item_list(URL, br#"{"data": []}"#).unwrap().is_empty());
        assert!(parse_item_list(URL, br#"{"data": null}"#).unwrap().is_empty());
        assert!(
            parse_item_list(URL, br#"{"errors": [{"status": "404"}]}"#)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn parse_item_list_tolerates_sparse_attributes() {
        let body = br#"{"data": [{"id": 7, "attributes": {"popularityRank": 0, "posterImage": null}}]}"#;
        let items = parse_item_list(URL, body).expect("sparse body should parse");
        assert_eq!(items[0].id.as_str(), "7");
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].poster, None);
        assert_eq!(items[0].popularity_rank, None);
    }

    #[test]
    fn parse_item_list_keeps_items_with_null_title() {
        let body = br#"{"data": [
            {"id": "1", "attributes": {"canonicalTitle": "Berserk"}},
            {"id": "2", "attributes": {"canonicalTitle": null, "popularityRank": 9}}
        ]}"#;
        let items = parse_item_list(URL, body).expect("null title should not reject the page");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Berserk");
        assert_eq!(items[1].title, "");
        assert_eq!(items[1].popularity_rank, Some(9));
    }

    #[test]
    fn parse_item_list_rejects_non_json_and_wrong_shapes() {
        for body in [&b"<html>busy</html>"[..], br#"{"data": {"id": "1"}}"#, br#"{"data": [{"id": "1"}]}"#] {
            let err = parse_item_list(URL, body).expect_err("body should be rejected");
            assert!(matches!(err, FetchError::Malformed { .. }));
        }
    }
}
