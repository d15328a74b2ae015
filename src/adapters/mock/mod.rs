//! Mock implementations for testing.
//!
//! Test doubles for every seam, usable without network access.
//!
//! # Available Mocks
//!
//! - [`MockTransport`] - Feed pages or errors per URL
//! - [`MockImageLoader`] - Image dimensions or errors per URL, with release gates
//! - [`FixedHeightFactory`] - Items with configured heights

pub mod factory;
pub mod image;
pub mod transport;

pub use factory::{FixedHeightFactory, FixedItem};
pub use image::{ImageGate, MockImageLoader, MockImageResponse};
pub use transport::{MockFeedResponse, MockTransport, RecordedFetch};
