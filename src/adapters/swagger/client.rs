//! HTTP retrieval of API descriptions
//!
//! The pipeline talks to services through the [`ApiDescriptionSource`] trait so
//! that the transport can be replaced in tests.

use crate::domain::{DocsmithError, Result, SourceError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Source of raw API description documents
#[async_trait]
pub trait ApiDescriptionSource: Send + Sync {
    /// Retrieves the description published at `url`
    ///
    /// One attempt only; callers decide what a failure means.
    async fn fetch(&self, url: &Url) -> std::result::Result<String, SourceError>;
}

/// Fetches descriptions over plain HTTP with reqwest
///
/// # Example
///
/// ```no_run
/// use docsmith::adapters::swagger::{ApiDescriptionSource, HttpDescriptionSource};
/// use std::time::Duration;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let source = HttpDescriptionSource::new(Duration::from_secs(30), Duration::from_secs(10))?;
/// let url = Url::parse("http://localhost:8080/v2/api-docs")?;
/// let body = source.fetch(&url).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpDescriptionSource {
    client: Client,
}

impl HttpDescriptionSource {
    /// Builds a source with a per-request and a connect timeout
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!("docsmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DocsmithError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ApiDescriptionSource for HttpDescriptionSource {
    async fn fetch(&self, url: &Url) -> std::result::Result<String, SourceError> {
        tracing::debug!(url = %url, "Fetching API description");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = resp.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: reason.to_string(),
            });
        }

        resp.text().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout(e.to_string())
            } else {
                SourceError::Body(e.to_string())
            }
        })
    }
}

fn classify_request_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout(err.to_string())
    } else {
        SourceError::ConnectionFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpDescriptionSource {
        HttpDescriptionSource::new(Duration::from_secs(5), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/api-docs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"swagger":"2.0"}"#)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/v2/api-docs", server.url())).unwrap();
        let body = source().fetch(&url).await.unwrap();

        assert_eq!(body, r#"{"swagger":"2.0"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_maps_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/api-docs")
            .with_status(404)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/v2/api-docs", server.url())).unwrap();
        let err = source().fetch(&url).await.unwrap_err();

        assert!(matches!(err, SourceError::Status { status: 404, .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_fetch_times_out_on_slow_response() {
        use std::io::Write;

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/api-docs")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_secs(2));
                w.write_all(br#"{"swagger":"2.0"}"#)
            })
            .create_async()
            .await;

        let source =
            HttpDescriptionSource::new(Duration::from_secs(1), Duration::from_secs(1)).unwrap();
        let url = Url::parse(&format!("{}/v2/api-docs", server.url())).unwrap();
        let err = source.fetch(&url).await.unwrap_err();

        assert!(matches!(err, SourceError::Timeout(_)), "{err}");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = Url::parse(&format!("http://127.0.0.1:{port}/v2/api-docs")).unwrap();
        let err = source().fetch(&url).await.unwrap_err();

        assert!(matches!(err, SourceError::ConnectionFailed(_)));
    }
}
