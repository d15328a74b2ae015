//! Mock feed transport for testing.
//!
//! Returns predefined pages or errors per URL and records every request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::feed::FeedPage;
use crate::traits::FeedTransport;

/// Configuration for a mock feed response.
#[derive(Debug, Clone)]
pub enum MockFeedResponse {
    /// Return this page
    Page(FeedPage),
    /// Return this error
    Error(TransportError),
    /// Never complete; the caller's timeout or cancellation must end the fetch
    Hang,
}

/// A recorded fetch for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    pub url: String,
    pub timeout: Duration,
}

/// Mock feed transport.
///
/// Clones share state, so a test can keep a handle after moving one into a
/// coordinator.
///
/// # Example
///
/// ```ignore
/// let transport = MockTransport::new();
/// transport.set_default_response(MockFeedResponse::Page(page));
/// let page = transport.fetch("https://feed.test/r/pics/.json", timeout).await?;
/// assert_eq!(transport.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, MockFeedResponse>>>,
    default_response: Arc<Mutex<Option<MockFeedResponse>>>,
    requests: Arc<Mutex<Vec<RecordedFetch>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for an exact URL.
    pub fn set_response(&self, url: &str, response: MockFeedResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Set the response for URLs without a specific match.
    pub fn set_default_response(&self, response: MockFeedResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Get all recorded fetches.
    pub fn get_requests(&self) -> Vec<RecordedFetch> {
        self.requests.lock().unwrap().clone()
    }

    fn get_response(&self, url: &str) -> Option<MockFeedResponse> {
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedTransport for MockTransport {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FeedPage, TransportError> {
        self.requests.lock().unwrap().push(RecordedFetch {
            url: url.to_string(),
            timeout,
        });

        match self.get_response(url) {
            Some(MockFeedResponse::Page(page)) => Ok(page),
            Some(MockFeedResponse::Error(err)) => Err(err),
            Some(MockFeedResponse::Hang) => std::future::pending().await,
            None => Err(TransportError::Status { status: 404 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Thread;

    #[tokio::test]
    async fn test_exact_match_before_default() {
        let transport = MockTransport::new();
        transport.set_default_response(MockFeedResponse::Error(TransportError::Status {
            status: 500,
        }));
        transport.set_response(
            "https://feed.test/a",
            MockFeedResponse::Page(FeedPage::new(
                vec![Thread::new("1", "https://i.test/1.png", "one")],
                Some("t3_1".to_string()),
            )),
        );

        let page = transport
            .fetch("https://feed.test/a", Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(page.threads.len(), 1);

        let err = transport
            .fetch("https://feed.test/b", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::Status { status: 500 });

        let requests = transport.get_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://feed.test/a");
    }

    #[tokio::test]
    async fn test_unconfigured_url_is_not_found() {
        let transport = MockTransport::new();
        let err = transport
            .fetch("https://feed.test/x", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::Status { status: 404 });
    }
}
