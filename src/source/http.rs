//! HTTP feed client.
//!
//! Performs a single GET of the feed resource and parses the body.
//!
//! ## Example
//!
//! ```rust,no_run
//! use apod_gallery::{Feed, HttpFeed};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let feed = HttpFeed::new(apod_gallery::DEFAULT_FEED_URL);
//!     for record in feed.fetch_all().await? {
//!         println!("{} {}", record.date, record.title);
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;

use super::{parse_records, Feed, FetchError, Record};

/// Public mirror of the APOD dataset.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Feed fetched over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: Client,
    url: String,
    description: String,
}

impl HttpFeed {
    /// Create a feed for the given URL with a default client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Create a feed that reuses an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        let url = url.into();
        let description = format!("http: {}", url);
        Self {
            client,
            url,
            description,
        }
    }

    /// Returns the feed URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Feed for HttpFeed {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        parse_records(&body)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a loopback port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/data.json", addr)
    }

    fn loopback_feed(url: String) -> HttpFeed {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpFeed::with_client(client, url)
    }

    #[test]
    fn test_http_feed_description() {
        let feed = HttpFeed::new("https://example.com/data.json");
        assert_eq!(feed.url(), "https://example.com/data.json");
        assert_eq!(feed.description(), "http: https://example.com/data.json");
    }

    #[tokio::test]
    async fn test_http_feed_parses_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"date":"2023-01-01","title":"A","explanation":"","media_type":"image","url":"a"}]"#,
        )
        .await;

        let records = loopback_feed(url).fetch_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "A");
    }

    #[tokio::test]
    async fn test_http_feed_non_success_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "[]").await;

        let err = loopback_feed(url).fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s == reqwest::StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_http_feed_malformed_body() {
        let url = serve_once("HTTP/1.1 200 OK", "<html>oops</html>").await;

        let err = loopback_feed(url).fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_http_feed_connection_refused() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = loopback_feed(format!("http://{}/data.json", addr))
            .fetch_all()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
