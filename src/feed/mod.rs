//! The link feed: page payloads, pagination and URL classification.

pub mod channels;
pub mod classify;
pub mod cursor;
pub mod models;

pub use channels::FragmentChannelResolver;
pub use classify::{classify_url, is_placeholder, ImageSource};
pub use cursor::FeedCursor;
pub use models::{FeedPage, Thread};
