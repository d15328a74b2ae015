//! Per-image load failures.

use std::time::Duration;

use thiserror::Error;

/// Failure outcomes of a single image load.
///
/// None of these block sibling loads of the same page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImageLoadError {
    /// The image could not be fetched.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The host answered with a non-2xx status.
    #[error("Image {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The bytes were not a decodable image.
    #[error("Could not decode image {url}: {message}")]
    Decode { url: String, message: String },

    /// The load did not finish before its deadline.
    #[error("Image {url} timed out after {}ms", .after.as_millis())]
    Timeout { url: String, after: Duration },

    /// The host served its "image missing" placeholder instead of the image.
    #[error("Image {url} is a {width}x{height} placeholder")]
    Placeholder { url: String, width: u32, height: u32 },

    /// The load task panicked before producing a result.
    #[error("Loading {url} aborted: {message}")]
    Aborted { url: String, message: String },
}

impl ImageLoadError {
    /// The URL of the image that failed.
    pub fn url(&self) -> &str {
        match self {
            ImageLoadError::Fetch { url, .. }
            | ImageLoadError::Status { url, .. }
            | ImageLoadError::Decode { url, .. }
            | ImageLoadError::Timeout { url, .. }
            | ImageLoadError::Placeholder { url, .. }
            | ImageLoadError::Aborted { url, .. } => url,
        }
    }

    /// Whether the image loaded fine but was rejected by the placeholder filter.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageLoadError::Placeholder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_accessor() {
        let err = ImageLoadError::Status {
            url: "https://i.imgur.com/x.jpg".to_string(),
            status: 404,
        };
        assert_eq!(err.url(), "https://i.imgur.com/x.jpg");
    }

    #[test]
    fn test_placeholder_display() {
        let err = ImageLoadError::Placeholder {
            url: "https://i.imgur.com/gone.jpg".to_string(),
            width: 161,
            height: 81,
        };
        assert!(err.is_placeholder());
        assert_eq!(
            err.to_string(),
            "Image https://i.imgur.com/gone.jpg is a 161x81 placeholder"
        );
    }
}
