//! Command-line interface.
//!
//! - [`args`] - Argument parsing
//! - [`render`] - Plain-text rendering of a settled board
//! - [`version`] - Version display

pub mod args;
pub mod render;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};
pub use version::VERSION;
