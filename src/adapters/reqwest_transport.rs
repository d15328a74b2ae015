//! Reqwest-based feed transport.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::feed::models::Listing;
use crate::feed::FeedPage;
use crate::traits::FeedTransport;

/// Feed transport using reqwest.
///
/// Fetches a listing with a per-request timeout and decodes it into a
/// [`FeedPage`].
///
/// # Example
///
/// ```ignore
/// use imgboard::adapters::ReqwestTransport;
/// use imgboard::traits::FeedTransport;
///
/// let transport = ReqwestTransport::new();
/// let page = transport
///     .fetch("https://www.reddit.com/r/pics/.json", Duration::from_secs(10))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new ReqwestTransport with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestTransport with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to TransportError.
    fn convert_error(err: reqwest::Error, timeout: Duration) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
            }
        } else {
            TransportError::Connection(err.to_string())
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedTransport for ReqwestTransport {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FeedPage, TransportError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::convert_error(e, timeout))?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::convert_error(e, timeout))?;
        let listing: Listing =
            serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(listing.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_transport_default() {
        let transport = ReqwestTransport::default();
        let _ = transport.inner();
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let transport = ReqwestTransport::new();
        let result = transport.fetch("not-a-valid-url", Duration::from_secs(1)).await;
        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let transport = ReqwestTransport::new();
        // Use a port that's unlikely to be in use
        let result = transport
            .fetch("http://127.0.0.1:59999/r/pics/.json", Duration::from_secs(2))
            .await;
        assert!(result.is_err());
    }
}
