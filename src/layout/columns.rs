//! Shortest-column placement.
//!
//! Column heights are measured from the items a column holds after every
//! append instead of being accumulated, so items whose rendered height
//! differs from any estimate (wrapped titles, scaled images) cannot make the
//! heights drift.

use std::sync::Arc;

use crate::traits::Renderable;

/// An append-only column of items and its last measured height.
#[derive(Debug)]
pub struct Column<I> {
    items: Vec<Arc<I>>,
    height: u32,
}

impl<I> Column<I> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            height: 0,
        }
    }

    pub fn items(&self) -> &[Arc<I>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Height recorded at the last measurement.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<I: Renderable> Column<I> {
    /// Measure the column's rendered height from its items.
    pub fn measure(&self, item_width: u32, item_gap: u32) -> u32 {
        self.items
            .iter()
            .map(|item| item.rendered_height(item_width).saturating_add(item_gap))
            .fold(0u32, u32::saturating_add)
    }
}

/// The board's columns.
///
/// Each [`Column`] carries its own height, so there is always exactly one
/// height per column.
#[derive(Debug)]
pub struct ColumnSet<I> {
    columns: Vec<Column<I>>,
    item_width: u32,
    item_gap: u32,
}

impl<I> Default for ColumnSet<I> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<I> ColumnSet<I> {
    /// Create an empty set with no columns. Items placed before the first
    /// [`ColumnSet::reset`] are dropped.
    pub fn new(item_gap: u32) -> Self {
        Self {
            columns: Vec::new(),
            item_width: 0,
            item_gap,
        }
    }

    pub fn columns(&self) -> &[Column<I>] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Heights in column order.
    pub fn heights(&self) -> Vec<u32> {
        self.columns.iter().map(Column::height).collect()
    }

    pub fn item_width(&self) -> u32 {
        self.item_width
    }

    /// Discard all columns and create `count` empty ones.
    pub fn reset(&mut self, count: usize) {
        self.columns = (0..count).map(|_| Column::new()).collect();
    }

    /// Index of the shortest column; ties go to the lowest index.
    pub fn shortest(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, column) in self.columns.iter().enumerate() {
            match best {
                Some((_, height)) if column.height >= height => {}
                _ => best = Some((index, column.height)),
            }
        }
        best.map(|(index, _)| index)
    }
}

impl<I: Renderable> ColumnSet<I> {
    /// Change the width items are measured at and re-measure every column.
    pub fn set_item_width(&mut self, item_width: u32) {
        if self.item_width == item_width {
            return;
        }
        self.item_width = item_width;
        let item_gap = self.item_gap;
        for column in &mut self.columns {
            column.height = column.measure(item_width, item_gap);
        }
    }

    /// Append `item` to the shortest column and re-measure that column.
    ///
    /// Returns the column index, or `None` when there are no columns yet.
    pub fn place(&mut self, item: Arc<I>) -> Option<usize> {
        let index = self.shortest()?;
        let (item_width, item_gap) = (self.item_width, self.item_gap);
        let column = &mut self.columns[index];
        column.items.push(item);
        column.height = column.measure(item_width, item_gap);
        Some(index)
    }

    /// Place every item of `history` in order.
    pub fn replay(&mut self, history: &[Arc<I>]) {
        for item in history {
            self.place(Arc::clone(item));
        }
    }
}
