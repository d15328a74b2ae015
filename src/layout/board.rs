//! The board: columns, acceptance history and style under one owner.

use std::sync::Arc;

use tracing::debug;

use crate::config::BoardConfig;
use crate::traits::Renderable;

use super::columns::ColumnSet;
use super::planner::{compute, LayoutPlan};
use super::style::{StyleProjector, StyleSheet};

/// What applying a width changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChange {
    pub plan: LayoutPlan,
    /// The column width changed and the style was re-projected
    pub restyled: bool,
    /// The column count changed and the columns were rebuilt from history
    pub rebuilt: bool,
}

impl LayoutChange {
    pub fn is_unchanged(&self) -> bool {
        !self.restyled && !self.rebuilt
    }
}

/// Owns the column set, the append-only history of accepted items and the
/// style projector.
#[derive(Debug)]
pub struct Board<I> {
    max_column_width: u32,
    margin_left: u32,
    columns: ColumnSet<I>,
    history: Vec<Arc<I>>,
    style: StyleProjector,
    plan: Option<LayoutPlan>,
}

impl<I: Renderable> Board<I> {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            max_column_width: config.max_column_width,
            margin_left: config.margin_left,
            columns: ColumnSet::new(config.item_gap),
            history: Vec::new(),
            style: StyleProjector::new(config.item_padding),
            plan: None,
        }
    }

    pub fn columns(&self) -> &ColumnSet<I> {
        &self.columns
    }

    /// Every accepted item, in acceptance order.
    pub fn history(&self) -> &[Arc<I>] {
        &self.history
    }

    /// Current geometry, `None` until the first width is applied.
    pub fn plan(&self) -> Option<LayoutPlan> {
        self.plan
    }

    pub fn style(&self) -> Option<&StyleSheet> {
        self.style.sheet()
    }

    /// Recompute the geometry for `available_width`.
    ///
    /// A changed column width re-projects the style; a changed column count
    /// rebuilds the columns by replaying the history. Applying the same width
    /// twice changes nothing the second time.
    pub fn apply_width(&mut self, available_width: u32) -> LayoutChange {
        let plan = compute(available_width, self.max_column_width, self.margin_left);
        let previous = self.plan.replace(plan);

        let restyled = previous.map_or(true, |p| p.column_width != plan.column_width);
        let rebuilt = previous.map_or(true, |p| p.column_count != plan.column_count);

        if restyled {
            self.style.project(plan.column_width, self.margin_left);
            self.columns
                .set_item_width(self.style.item_width(plan.column_width));
        }
        if rebuilt {
            debug!(
                "Rebuilding {} columns from {} items",
                plan.column_count,
                self.history.len()
            );
            self.columns.reset(plan.column_count);
            self.columns.replay(&self.history);
        }

        LayoutChange {
            plan,
            restyled,
            rebuilt,
        }
    }

    /// Record an accepted item and place it. Returns the column it went to,
    /// or `None` when no width has been applied yet (it is still kept in the
    /// history and appears on the first rebuild).
    pub fn accept(&mut self, item: I) -> Option<usize> {
        let item = Arc::new(item);
        self.history.push(Arc::clone(&item));
        self.columns.place(item)
    }
}
