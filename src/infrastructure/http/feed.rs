// SPDX-License-Identifier: MPL-2.0
//! Feed source backed by a static JSON document.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use super::{build_client, get_bytes};
use crate::application::port::FeedSource;
use crate::domain::apod::Record;
use crate::domain::error::NetworkError;

/// Fetches the feed with one `GET` per call.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedSource {
    /// Creates a source for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, user_agent: &str) -> Result<Self, NetworkError> {
        Ok(Self {
            client: build_client(user_agent)?,
            url: url.into(),
        })
    }

    /// Creates a source for `url` sharing an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Record>, NetworkError>> {
        let client = self.client.clone();
        let url = self.url.clone();
        async move {
            let body = get_bytes(&client, &url).await?;
            decode_feed(&body)
        }
        .boxed()
    }

    fn location(&self) -> &str {
        &self.url
    }
}

/// Parses the feed body: a JSON array of records.
///
/// # Errors
///
/// Returns [`NetworkError::Decode`] if the body is not an array of records.
pub fn decode_feed(body: &[u8]) -> Result<Vec<Record>, NetworkError> {
    serde_json::from_slice(body).map_err(|e| NetworkError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::apod::MediaKind;
    use crate::test_utils::{serve_once, FixtureResponse};

    const FEED: &str = r#"[
        {"date":"2024-01-02","title":"B","media_type":"video","url":"https://youtu.be/dQw4w9WgXcQ"},
        {"date":"2024-01-01","title":"A","explanation":"x","media_type":"image",
         "url":"https://a/1.jpg","hdurl":"https://a/1_hd.jpg","copyright":"someone"}
    ]"#;

    #[test]
    fn decode_accepts_feed_array_and_ignores_unknown_fields() {
        let records = decode_feed(FEED.as_bytes()).expect("valid feed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].media_type, MediaKind::Video);
        assert_eq!(records[1].hdurl(), Some("https://a/1_hd.jpg"));
    }

    #[test]
    fn decode_rejects_non_array() {
        let err = decode_feed(br#"{"date":"2024-01-01"}"#).unwrap_err();
        assert!(matches!(err, NetworkError::Decode(_)));
    }

    #[test]
    fn decode_rejects_record_without_title() {
        let err = decode_feed(br#"[{"date":"2024-01-01"}]"#).unwrap_err();
        assert!(matches!(err, NetworkError::Decode(_)));
    }

    #[tokio::test]
    async fn fetch_reads_records_from_server() {
        let (base, server) = serve_once(FixtureResponse::json(FEED)).await;
        let source =
            HttpFeedSource::new(format!("{base}/data.json"), "ApodGallery-test").expect("client");

        let records = source.fetch().await.expect("fetch succeeds");
        let request = server.await.expect("server task");

        assert_eq!(records.len(), 2);
        assert!(request.starts_with("GET /data.json "));
        assert!(request
            .to_ascii_lowercase()
            .contains("user-agent: apodgallery-test"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_network_error() {
        let (base, server) = serve_once(FixtureResponse::status(404)).await;
        let source = HttpFeedSource::new(base, "ApodGallery-test").expect("client");

        let err = source.fetch().await.unwrap_err();
        server.await.expect("server task");

        assert_eq!(err, NetworkError::Status(404));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (base, server) = serve_once(FixtureResponse::json("not json")).await;
        let source = HttpFeedSource::new(base, "ApodGallery-test").expect("client");

        let err = source.fetch().await.unwrap_err();
        server.await.expect("server task");

        assert!(matches!(err, NetworkError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Bind then drop to obtain a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let source = HttpFeedSource::new(format!("http://{addr}/"), "ApodGallery-test")
            .expect("client");
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, NetworkError::Transport(_)));
        assert_eq!(source.location(), format!("http://{addr}/"));
    }
}
