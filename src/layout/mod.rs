//! Masonry layout: column geometry, column placement and the generated style.
//!
//! - [`planner`] - Column count and width from the available width
//! - [`columns`] - Shortest-column placement with measured heights
//! - [`style`] - CSS rules for the current geometry
//! - [`board`] - Owner of columns, history and style; applies widths idempotently

pub mod board;
pub mod columns;
pub mod planner;
pub mod style;

pub use board::{Board, LayoutChange};
pub use columns::{Column, ColumnSet};
pub use planner::{compute, LayoutPlan};
pub use style::{StyleProjector, StyleSheet};
