//! Reqwest-based image loader.
//!
//! Downloads the image and reads its dimensions from the header with the
//! `image` crate; pixels are never decoded.

use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use image::ImageReader;

use crate::error::ImageLoadError;
use crate::traits::{ImageLoader, LoadedImage};

/// Image loader using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestImageLoader {
    client: reqwest::Client,
}

impl ReqwestImageLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a loader sharing an existing reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `(width, height)` from encoded image bytes.
pub fn read_dimensions(bytes: &Bytes) -> Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes.as_ref()))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}

#[async_trait]
impl ImageLoader for ReqwestImageLoader {
    async fn load(&self, url: &str) -> Result<LoadedImage, ImageLoadError> {
        let fetch_error = |e: reqwest::Error| ImageLoadError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;
        if !response.status().is_success() {
            return Err(ImageLoadError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        // Redirects are followed; report where the image actually came from.
        let source_url = response.url().to_string();
        let body = response.bytes().await.map_err(fetch_error)?;
        let (width, height) = read_dimensions(&body).map_err(|message| ImageLoadError::Decode {
            url: url.to_string(),
            message,
        })?;

        Ok(LoadedImage::new(width, height, source_url))
    }
}
