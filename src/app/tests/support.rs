use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::app::App;
use crate::catalog::{CatalogItem, CatalogQuery, CatalogSource, ItemId, PosterImage};
use crate::config::Config;
use crate::controller::{FetchCompletion, FetchRequest};
use crate::error::{FetchError, FetchResult};

/// Answers queries from a queue of canned responses and records every
/// query it was asked.
#[derive(Default)]
pub(super) struct ScriptedSource {
    responses: Mutex<VecDeque<FetchResult<Vec<CatalogItem>>>>,
    queries: Mutex<Vec<CatalogQuery>>,
}

impl ScriptedSource {
    pub(super) fn push_items(&self, items: Vec<CatalogItem>) {
        self.responses.lock().expect("lock").push_back(Ok(items));
    }

    pub(super) fn push_failure(&self, status: u16) {
        self.responses.lock().expect("lock").push_back(Err(FetchError::Status {
            url: "scripted".to_string(),
            status,
        }));
    }

    pub(super) fn recorded(&self) -> Vec<CatalogQuery> {
        self.queries.lock().expect("lock").clone()
    }
}

impl CatalogSource for ScriptedSource {
    fn fetch<'a>(&'a self, query: &'a CatalogQuery) -> BoxFuture<'a, FetchResult<Vec<CatalogItem>>> {
        async move {
            self.queries.lock().expect("lock").push(query.clone());
            self.responses
                .lock()
                .expect("lock")
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
        .boxed()
    }
}

pub(super) fn app_with(source: Arc<ScriptedSource>) -> App {
    App::with_source(Config::default(), source)
}

/// Runs the request against the app's source and applies the completion,
/// the way the event loop would.
pub(super) async fn settle(app: &mut App, request: FetchRequest) {
    let result = app.source.fetch(&request.query).await;
    let _ = app.apply_fetch(FetchCompletion { request, result });
}

pub(super) fn manga(id: usize) -> CatalogItem {
    CatalogItem {
        id: ItemId::new(id.to_string()),
        title: format!("Manga {id}"),
        poster: Some(PosterImage {
            small: Some(format!("https://media.kitsu.io/{id}/small.jpg")),
            large: Some(format!("https://media.kitsu.io/{id}/large.jpg")),
        }),
        popularity_rank: Some(id as u32 + 1),
        status: Some("finished".to_string()),
        chapter_count: Some(10),
        synopsis: None,
    }
}

pub(super) fn page_of(start: usize, len: usize) -> Vec<CatalogItem> {
    (start..start + len).map(manga).collect()
}
