//! Trait abstractions for the board's external collaborators.
//!
//! The load coordinator only ever talks to these seams, so production
//! adapters and test doubles are interchangeable.
//!
//! # Traits
//!
//! - [`FeedTransport`] - Fetches one page of the link feed
//! - [`ImageLoader`] - Loads an image and reports its pixel dimensions
//! - [`ItemFactory`] - Materializes an accepted image into a renderable item
//! - [`Renderable`] - Reports an item's rendered height at a given width
//! - [`ChannelResolver`] - Derives channel names from a location indicator

pub mod channels;
pub mod factory;
pub mod image;
pub mod transport;

pub use channels::ChannelResolver;
pub use factory::{ItemFactory, Renderable};
pub use image::{ImageLoader, LoadedImage};
pub use transport::FeedTransport;
