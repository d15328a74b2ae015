//! Thread URL classification and the placeholder filter.
//!
//! Some image hosts serve short links that point at an HTML page rather than
//! the image itself. Those are rewritten to a directly loadable preview, and
//! the full-size URL is kept for the item's link target.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::traits::LoadedImage;

/// Domain of the rewriting provider.
pub const PROVIDER_DOMAIN: &str = "imgur.com";

/// Dimensions of the image the provider serves in place of a removed one.
pub const PLACEHOLDER_SIZE: (u32, u32) = (161, 81);

static SHORT_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:www\.)?imgur\.com/([A-Za-z0-9_]+)/?$").expect("Invalid short link regex")
});

/// Where to load a thread's image from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// URL handed to the image loader
    pub load_url: String,
    /// Full-size image, when the load URL is a reduced preview
    pub fullsize_url: Option<String>,
}

/// Classify a thread URL.
///
/// Provider short links become a large preview plus a full-size URL;
/// everything else is loaded as-is.
pub fn classify_url(url: &str) -> ImageSource {
    match SHORT_LINK.captures(url.trim()) {
        Some(caps) => {
            let id = &caps[1];
            ImageSource {
                load_url: format!("https://i.{}/{}l.jpg", PROVIDER_DOMAIN, id),
                fullsize_url: Some(format!("https://i.{}/{}.jpg", PROVIDER_DOMAIN, id)),
            }
        }
        None => ImageSource {
            load_url: url.to_string(),
            fullsize_url: None,
        },
    }
}

/// Whether a successfully loaded image is really the provider's
/// "image missing" placeholder.
///
/// Both the exact sentinel size and a provider host are required; a real
/// 161x81 image from elsewhere is accepted.
pub fn is_placeholder(image: &LoadedImage) -> bool {
    (image.width, image.height) == PLACEHOLDER_SIZE && is_provider_host(&image.source_url)
}

fn is_provider_host(url: &str) -> bool {
    let Ok(parsed) = reqwest::Url::parse(url) else {
        return false;
    };
    match parsed.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            host == PROVIDER_DOMAIN || host.ends_with(&format!(".{}", PROVIDER_DOMAIN))
        }
        None => false,
    }
}
