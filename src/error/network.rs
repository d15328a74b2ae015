//! Feed transport error types.
//!
//! This module defines the terminal failure outcomes of a page fetch.

use std::time::Duration;

use thiserror::Error;

/// Failure outcomes of a feed fetch.
///
/// `Timeout` and `Cancelled` are distinguished from the rest because the
/// load coordinator reconciles them differently: a timeout is surfaced to the
/// user, a cancellation is reconciled silently.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The fetch did not complete before its deadline.
    #[error("Feed request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The fetch was cancelled before it completed.
    #[error("Feed request cancelled")]
    Cancelled,

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The feed answered with a non-2xx status.
    #[error("Feed returned HTTP {status}")]
    Status { status: u16 },

    /// The payload was not a valid feed listing.
    #[error("Malformed feed payload: {0}")]
    Decode(String),

    /// The fetch task panicked before producing a result.
    #[error("Feed request aborted: {0}")]
    Aborted(String),
}

impl TransportError {
    /// Whether this failure should raise a user-visible connectivity alert.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Timeout(_) => {
                "Could not reach the feed. Please check your internet connection.".to_string()
            }
            TransportError::Cancelled => "Loading was cancelled.".to_string(),
            TransportError::Connection(_) => {
                "Unable to connect to the feed server.".to_string()
            }
            TransportError::Status { status } => match *status {
                404 => "The requested channels do not exist.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => "The feed server is having issues. Please try again later.".to_string(),
                _ => format!("The feed returned an error (HTTP {}).", status),
            },
            TransportError::Decode(_) => "The feed returned an unexpected response.".to_string(),
            TransportError::Aborted(_) => "Loading stopped unexpectedly.".to_string(),
        }
    }
}
