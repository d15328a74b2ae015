//! Feed transport trait abstraction.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::feed::FeedPage;

/// Trait for fetching one page of the feed.
///
/// Implementations must deliver exactly one result per call and must honour
/// `timeout`, reporting an expired deadline as [`TransportError::Timeout`].
/// Cancellation is handled by the caller dropping the future.
///
/// # Example
///
/// ```ignore
/// use imgboard::traits::FeedTransport;
///
/// async fn first_page<T: FeedTransport>(transport: &T) {
///     let page = transport
///         .fetch("https://www.reddit.com/r/pics/.json", Duration::from_secs(10))
///         .await?;
///     println!("{} threads, next: {:?}", page.threads.len(), page.next_token);
/// }
/// ```
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// Fetch and decode the page at `url`.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FeedPage, TransportError>;
}
