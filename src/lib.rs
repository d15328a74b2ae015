//! imgboard - a masonry image board over a paginated link feed.
//!
//! The crate pages a Reddit-style listing, loads each thread's image in
//! parallel, rejects provider placeholders, and places accepted images into
//! the shortest of a responsive set of columns as they arrive.
//!
//! # Modules
//!
//! - [`layout`] - Column geometry, shortest-column placement, generated CSS
//! - [`feed`] - Feed payloads, pagination cursor, URL classification
//! - [`coordinator`] - Dispatch and settlement of fetches and image loads
//! - [`traits`] / [`adapters`] - External seams and their implementations

pub mod adapters;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod feed;
pub mod layout;
pub mod logging;
pub mod traits;
