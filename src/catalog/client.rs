use std::time::{Duration, Instant};

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult, FetchError, FetchResult};

use super::query::CatalogQuery;
use super::types::{CatalogItem, CatalogSource};
use super::wire::parse_item_list;

const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// [`CatalogSource`] backed by the Kitsu edge API.
#[derive(Debug, Clone)]
pub struct KitsuClient {
    http: Client,
    base_url: String,
}

impl KitsuClient {
    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(AppError::HttpClient)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_list(&self, query: &CatalogQuery) -> FetchResult<Vec<CatalogItem>> {
        let url = query.to_url(&self.base_url);
        let started = Instant::now();
        tracing::debug!(%url, "catalog request");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, JSON_API_MEDIA_TYPE)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Network {
            url: url.clone(),
            source,
        })?;
        let items = parse_item_list(&url, &body)?;
        tracing::debug!(
            %url,
            items = items.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog response"
        );
        Ok(items)
    }
}

impl CatalogSource for KitsuClient {
    fn fetch<'a>(&'a self, query: &'a CatalogQuery) -> BoxFuture<'a, FetchResult<Vec<CatalogItem>>> {
        self.fetch_list(query).boxed()
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use crate::catalog::{CatalogQuery, CatalogSource};
    use crate::config::ApiConfig;
    use crate::error::{FetchError, FetchErrorKind};

    use super::KitsuClient;

    /// Answers exactly one request with `status` and `body`, handing back
    /// the raw request head it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let addr = listener.local_addr().expect("listener has an address");
        let task = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("client should connect");
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.expect("request should be readable");
                if read == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..read]);
            }
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(reply.as_bytes())
                .await
                .expect("reply should be written");
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&head).into_owned()
        });
        (format!("http://{addr}/api"), task)
    }

    fn client_for(base_url: String) -> KitsuClient {
        let config = ApiConfig {
            base_url,
            timeout_ms: 5_000,
            ..ApiConfig::default()
        };
        KitsuClient::from_config(&config).expect("client should build")
    }

    #[test]
    fn from_config_keeps_base_url() {
        let client = client_for("http://127.0.0.1:9/api".to_string());
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api");
    }

    #[tokio::test]
    async fn fetch_decodes_items_and_sends_json_api_accept() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"data":[{"id":"11","attributes":{"canonicalTitle":"Vagabond","popularityRank":4}}]}"#,
        )
        .await;
        let client = client_for(base_url);

        let items = client
            .fetch(&CatalogQuery::popular_page(1))
            .await
            .expect("200 with a list body should decode");
        let head = server.await.expect("server task should finish").to_ascii_lowercase();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Vagabond");
        assert_eq!(items[0].popularity_rank, Some(4));
        assert!(head.starts_with("get /api/manga?sort=popularityrank"));
        assert!(head.contains("offset"));
        assert!(head.contains("=20 http/1.1"));
        assert!(head.contains("accept: application/vnd.api+json"));
    }

    #[tokio::test]
    async fn fetch_maps_error_status_to_status_failure() {
        let (base_url, server) = serve_once("500 Internal Server Error", "oops").await;
        let client = client_for(base_url);

        let err = client
            .fetch(&CatalogQuery::text("berserk"))
            .await
            .expect_err("500 should fail");
        let _ = server.await;

        assert!(matches!(err, FetchError::Status { status: 500, .. }));
        assert_eq!(err.kind(), FetchErrorKind::NetworkFailure);
    }

    #[tokio::test]
    async fn fetch_reports_html_body_as_malformed() {
        let (base_url, server) = serve_once("200 OK", "<html><body>maintenance</body></html>").await;
        let client = client_for(base_url);

        let err = client
            .fetch(&CatalogQuery::popular_page(0))
            .await
            .expect_err("html is not a catalog document");
        let _ = server.await;

        assert!(matches!(err, FetchError::Malformed { .. }));
        assert_eq!(err.kind(), FetchErrorKind::MalformedResponse);
    }
}
