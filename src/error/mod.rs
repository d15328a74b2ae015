//! Error handling for the image board.
//!
//! Every failure is local to one unit of work (a page fetch or an image
//! load) and none is fatal to the board. The seam-level errors are:
//!
//! | Error | Raised by | Surfaced to user |
//! |-------|-----------|------------------|
//! | [`TransportError::Timeout`] | feed fetch | yes, as a connectivity alert |
//! | [`TransportError::Cancelled`] | feed fetch | no |
//! | [`ImageLoadError`] | image load | no |
//! | [`ImageLoadError::Placeholder`] | placeholder filter | no |
//!
//! [`BoardError`] unifies them for callers that want a single type.

mod category;
mod config;
mod image;
mod network;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use image::ImageLoadError;
pub use network::TransportError;

use thiserror::Error;

/// Unified error type for the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A feed fetch failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// An image load failed or was rejected.
    #[error(transparent)]
    Image(#[from] ImageLoadError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BoardError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardError::Transport(TransportError::Cancelled) => ErrorCategory::Cancelled,
            BoardError::Transport(TransportError::Decode(_)) => ErrorCategory::Content,
            BoardError::Transport(_) => ErrorCategory::Network,
            BoardError::Image(_) => ErrorCategory::Content,
            BoardError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether the failure warrants a user-visible alert.
    pub fn is_user_visible(&self) -> bool {
        match self {
            BoardError::Transport(err) => err.is_user_visible(),
            BoardError::Image(_) => false,
            BoardError::Config(_) => true,
        }
    }
}

/// Type alias for Results using [`BoardError`].
pub type BoardResult<T> = Result<T, BoardError>;
