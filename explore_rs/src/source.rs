//! Page data sources.
//!
//! The page loader only knows [`PageSource`]. Production code talks to the
//! CMS over HTTP; the CLI can also replay a saved response from disk, and
//! tests plug in in-memory sources.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::error::{ExploreError, Result};
use crate::types::PageResponse;

/// Default CMS host.
pub const DEFAULT_CMS_BASE_URL: &str = "https://dev-explore-cms.holidaytribe.ai";

/// Anything that can produce a `page-by-name` response.
pub trait PageSource: Send + Sync {
    /// Fetch the page called `name` (already decoded, e.g. `"All Destinations"`).
    fn fetch_page(&self, name: &str) -> impl Future<Output = Result<PageResponse>> + Send;
}

/// `{base}/api/page-by-name?name={name}` with the name query-encoded.
pub fn page_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/api/page-by-name?name={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(name)
    )
}

/// CMS client over HTTP.
pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, name: &str) -> Result<PageResponse> {
        let url = page_url(&self.base_url, name);
        info!(%url, "fetching page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExploreError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "page response received");
        Ok(serde_json::from_str(&body)?)
    }
}

/// Replays a saved `page-by-name` response from a JSON file.
pub struct FilePageSource {
    path: PathBuf,
}

impl FilePageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FilePageSource {
    async fn fetch_page(&self, name: &str) -> Result<PageResponse> {
        debug!(page = name, path = %self.path.display(), "reading saved page response");
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ExploreError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    #[test]
    fn page_url_encodes_the_name() {
        assert_eq!(
            page_url("https://cms.example/", "All Destinations"),
            "https://cms.example/api/page-by-name?name=All%20Destinations"
        );
        assert_eq!(
            page_url("https://cms.example", "Beach & Bays"),
            "https://cms.example/api/page-by-name?name=Beach%20%26%20Bays"
        );
    }

    #[tokio::test]
    async fn http_source_decodes_success_body() {
        let base = serve_once(
            "200 OK",
            r#"{"success":true,"data":{"id":"p1","name":"Home","slug":"home","sections":[]}}"#,
        )
        .await;
        let source = HttpPageSource::new(base, Duration::from_secs(5)).unwrap();

        let resp = source.fetch_page("Home").await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap().slug, "home");
    }

    #[tokio::test]
    async fn http_source_maps_non_2xx_to_status_error() {
        let base = serve_once("503 Service Unavailable", "").await;
        let source = HttpPageSource::new(base, Duration::from_secs(5)).unwrap();

        let err = source.fetch_page("Home").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[tokio::test]
    async fn http_source_rejects_malformed_body() {
        let base = serve_once("200 OK", "<html>").await;
        let source = HttpPageSource::new(base, Duration::from_secs(5)).unwrap();

        let err = source.fetch_page("Home").await.unwrap_err();
        assert!(matches!(err, ExploreError::Decode(_)));
    }

    #[tokio::test]
    async fn file_source_reads_saved_response() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, r#"{"success":false,"message":"Page not found"}"#).unwrap();

        let resp = FilePageSource::new(&path).fetch_page("x").await.unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Page not found"));
    }

    #[tokio::test]
    async fn file_source_missing_file_is_io_error() {
        let err = FilePageSource::new("/definitely/not/here.json")
            .fetch_page("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ExploreError::Io { .. }));
    }
}
