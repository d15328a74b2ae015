//! Image loader trait abstraction.

use async_trait::async_trait;

use crate::error::ImageLoadError;

/// An image that loaded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// URL the image was actually loaded from
    pub source_url: String,
}

impl LoadedImage {
    /// Create a new loaded image record.
    pub fn new(width: u32, height: u32, source_url: impl Into<String>) -> Self {
        Self {
            width,
            height,
            source_url: source_url.into(),
        }
    }

    /// Height of the image when scaled to `width`, keeping its aspect ratio.
    /// Saturates at `u32::MAX`.
    pub fn scaled_height(&self, width: u32) -> u32 {
        if self.width == 0 {
            return 0;
        }
        let scaled = u64::from(self.height) * u64::from(width) / u64::from(self.width);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

/// Trait for loading a single image.
///
/// A load either yields the image's dimensions or an [`ImageLoadError`];
/// the placeholder filter is applied by the caller, not the loader.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Load the image at `url`.
    async fn load(&self, url: &str) -> Result<LoadedImage, ImageLoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_height_keeps_aspect_ratio() {
        let image = LoadedImage::new(800, 600, "https://example.com/a.jpg");
        assert_eq!(image.scaled_height(400), 300);
        assert_eq!(image.scaled_height(290), 217);
    }

    #[test]
    fn test_scaled_height_saturates_for_extreme_aspect_ratio() {
        let image = LoadedImage::new(1, 2_147_483_000, "https://example.com/strip.png");
        assert_eq!(image.scaled_height(290), u32::MAX);

        let image = LoadedImage::new(1, 14_810_267, "https://example.com/strip.png");
        assert_eq!(image.scaled_height(290), u32::MAX);
    }

    #[test]
    fn test_scaled_height_zero_width_image() {
        let image = LoadedImage::new(0, 600, "https://example.com/a.jpg");
        assert_eq!(image.scaled_height(400), 0);
    }
}
