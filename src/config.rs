//! Board configuration.
//!
//! Use the builder methods to customize a [`BoardConfig`], or
//! [`BoardConfig::from_env`] to read overrides from `IMGBOARD_*` variables.

use std::time::Duration;

use crate::error::ConfigError;

/// Default feed host.
pub const DEFAULT_FEED_URL: &str = "https://www.reddit.com";

/// Channels used when the caller supplies none.
pub const DEFAULT_CHANNELS: &[&str] = &["pics"];

/// Configuration for the board and its load coordinator.
///
/// # Example
///
/// ```
/// use imgboard::config::BoardConfig;
/// use std::time::Duration;
///
/// let config = BoardConfig::default()
///     .with_max_column_width(240)
///     .with_fetch_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_column_width, 240);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Base URL of the feed (scheme and host, no trailing slash)
    pub feed_base_url: String,
    /// Channels to request when none are resolved from the location
    pub default_channels: Vec<String>,
    /// Threads requested per page
    pub page_size: u32,
    /// Upper bound on a column's width in pixels
    pub max_column_width: u32,
    /// Horizontal gap between columns in pixels
    pub margin_left: u32,
    /// Pixels subtracted from the column width to get the item width
    pub item_padding: u32,
    /// Vertical gap below each item, counted in a column's measured height
    pub item_gap: u32,
    /// Deadline for a page fetch
    pub fetch_timeout: Duration,
    /// Deadline for a single image load
    pub image_timeout: Duration,
    /// Quiet period after the last resize before the layout is recomputed
    pub resize_debounce: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            feed_base_url: DEFAULT_FEED_URL.to_string(),
            default_channels: DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect(),
            page_size: 25,
            max_column_width: 300,
            margin_left: 10,
            item_padding: 10,
            item_gap: 0,
            fetch_timeout: Duration::from_secs(10),
            image_timeout: Duration::from_secs(30),
            resize_debounce: Duration::from_millis(150),
        }
    }
}

impl BoardConfig {
    /// Create a new BoardConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feed base URL. A trailing slash is dropped.
    pub fn with_feed_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.feed_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the fallback channel set.
    pub fn with_default_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of threads requested per page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the maximum column width.
    pub fn with_max_column_width(mut self, width: u32) -> Self {
        self.max_column_width = width;
        self
    }

    /// Set the gap between columns.
    pub fn with_margin_left(mut self, margin: u32) -> Self {
        self.margin_left = margin;
        self
    }

    /// Set the padding allowance subtracted from the column width for items.
    pub fn with_item_padding(mut self, padding: u32) -> Self {
        self.item_padding = padding;
        self
    }

    /// Set the vertical gap below each item.
    pub fn with_item_gap(mut self, gap: u32) -> Self {
        self.item_gap = gap;
        self
    }

    /// Set the page fetch deadline.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the image load deadline.
    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    /// Set the resize debounce window.
    pub fn with_resize_debounce(mut self, delay: Duration) -> Self {
        self.resize_debounce = delay;
        self
    }

    /// Create config from `IMGBOARD_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Split out from [`BoardConfig::from_env`] so overrides can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("IMGBOARD_FEED_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidFeedUrl(url));
            }
            config = config.with_feed_base_url(url);
        }
        if let Some(channels) = lookup("IMGBOARD_CHANNELS") {
            let channels: Vec<String> = channels
                .split('+')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
            if !channels.is_empty() {
                config.default_channels = channels;
            }
        }
        if let Some(value) = lookup("IMGBOARD_PAGE_SIZE") {
            config.page_size = parse_number("IMGBOARD_PAGE_SIZE", &value)?;
        }
        if let Some(value) = lookup("IMGBOARD_MAX_COLUMN_WIDTH") {
            config.max_column_width = parse_number("IMGBOARD_MAX_COLUMN_WIDTH", &value)?;
        }
        if let Some(value) = lookup("IMGBOARD_MARGIN") {
            config.margin_left = parse_number("IMGBOARD_MARGIN", &value)?;
        }
        if let Some(value) = lookup("IMGBOARD_FETCH_TIMEOUT_MS") {
            let ms: u64 = parse_number("IMGBOARD_FETCH_TIMEOUT_MS", &value)?;
            config.fetch_timeout = Duration::from_millis(ms);
        }
        if let Some(value) = lookup("IMGBOARD_IMAGE_TIMEOUT_MS") {
            let ms: u64 = parse_number("IMGBOARD_IMAGE_TIMEOUT_MS", &value)?;
            config.image_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_board_config_default() {
        let config = BoardConfig::default();
        assert_eq!(config.feed_base_url, "https://www.reddit.com");
        assert_eq!(config.default_channels, vec!["pics".to_string()]);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.max_column_width, 300);
        assert_eq!(config.margin_left, 10);
        assert_eq!(config.item_padding, 10);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.resize_debounce, Duration::from_millis(150));
    }

    #[test]
    fn test_builder_chain() {
        let config = BoardConfig::new()
            .with_feed_base_url("http://localhost:8080/")
            .with_default_channels(["aww", "earthporn"])
            .with_page_size(10)
            .with_margin_left(4)
            .with_item_gap(6);
        assert_eq!(config.feed_base_url, "http://localhost:8080");
        assert_eq!(config.default_channels, vec!["aww", "earthporn"]);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.margin_left, 4);
        assert_eq!(config.item_gap, 6);
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = BoardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = BoardConfig::from_lookup(lookup_from(&[
            ("IMGBOARD_FEED_URL", "http://127.0.0.1:9000"),
            ("IMGBOARD_CHANNELS", "aww+ pics +"),
            ("IMGBOARD_MAX_COLUMN_WIDTH", "250"),
            ("IMGBOARD_FETCH_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.feed_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.default_channels, vec!["aww", "pics"]);
        assert_eq!(config.max_column_width, 250);
        assert_eq!(config.fetch_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_from_lookup_blank_channels_keeps_default() {
        let config = BoardConfig::from_lookup(lookup_from(&[("IMGBOARD_CHANNELS", "+")])).unwrap();
        assert_eq!(config.default_channels, vec!["pics"]);
    }

    #[test]
    fn test_from_lookup_invalid_number() {
        let err = BoardConfig::from_lookup(lookup_from(&[("IMGBOARD_MARGIN", "wide")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "IMGBOARD_MARGIN"
        ));
    }

    #[test]
    fn test_from_lookup_invalid_url() {
        let err = BoardConfig::from_lookup(lookup_from(&[("IMGBOARD_FEED_URL", "reddit.com")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidFeedUrl("reddit.com".to_string()));
    }
}
