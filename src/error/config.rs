//! Configuration errors.

use thiserror::Error;

/// Errors raised while building a [`crate::config::BoardConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// The feed base URL is not an absolute http(s) URL.
    #[error("Invalid feed URL: {0}")]
    InvalidFeedUrl(String),
}
