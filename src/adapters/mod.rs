//! Concrete implementations of the trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestTransport`] - Feed transport using reqwest
//! - [`ReqwestImageLoader`] - Image loader using reqwest and the `image` crate
//! - [`HeadlessItemFactory`] - Item factory with computed card heights
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all seams:
//! - [`mock::MockTransport`] - Configurable feed pages
//! - [`mock::MockImageLoader`] - Configurable image loads with release gates
//! - [`mock::FixedHeightFactory`] - Items with fixed heights

pub mod headless;
pub mod mock;
pub mod reqwest_image;
pub mod reqwest_transport;

pub use headless::{Card, HeadlessItemFactory, TextMetrics};
pub use mock::{FixedHeightFactory, MockImageLoader, MockTransport};
pub use reqwest_image::ReqwestImageLoader;
pub use reqwest_transport::ReqwestTransport;
