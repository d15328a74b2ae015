//! Forward-only pagination over a channel set.

use crate::config::BoardConfig;

/// Pagination state for the feed: the channel set and the token of the next
/// page. A `None` token means the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCursor {
    base_url: String,
    page_size: u32,
    default_channels: Vec<String>,
    channels: Vec<String>,
    token: Option<String>,
}

impl FeedCursor {
    /// Create a cursor at the first page of `channels`.
    pub fn new(config: &BoardConfig, channels: Vec<String>) -> Self {
        Self {
            base_url: config.feed_base_url.clone(),
            page_size: config.page_size,
            default_channels: config.default_channels.clone(),
            channels,
            token: None,
        }
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replace the channel set and restart from the first page.
    pub fn set_channels(&mut self, channels: Vec<String>) {
        self.channels = channels;
        self.token = None;
    }

    /// URL of the next page for the stored channels and token.
    pub fn next_url(&self) -> String {
        self.build_url(&self.channels, self.token.as_deref())
    }

    /// Build the listing URL for `channels` at `token`.
    ///
    /// An empty channel set is replaced by the configured defaults.
    pub fn build_url(&self, channels: &[String], token: Option<&str>) -> String {
        let channels = if channels.is_empty() {
            &self.default_channels
        } else {
            channels
        };
        let path = channels
            .iter()
            .map(|c| urlencoding::encode(c).into_owned())
            .collect::<Vec<_>>()
            .join("+");

        let mut url = format!("{}/r/{}/.json?limit={}", self.base_url, path, self.page_size);
        if let Some(token) = token {
            url.push_str("&after=");
            url.push_str(&urlencoding::encode(token));
        }
        url
    }

    /// Store the token returned with the latest page, unconditionally.
    pub fn advance(&mut self, token: Option<String>) {
        self.token = token;
    }
}
