//! Column geometry.

/// Column geometry for a given available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutPlan {
    /// Number of columns, never less than 1
    pub column_count: usize,
    /// Width of each column in pixels
    pub column_width: u32,
}

/// Compute the column geometry.
///
/// The column width is `min(max_column_width, available_width)`. When a
/// single column fills the available width there is exactly one column;
/// otherwise as many additional `column_width + margin_left` slots as fit in
/// the remaining width are added.
///
/// # Example
///
/// ```
/// use imgboard::layout::{compute, LayoutPlan};
///
/// assert_eq!(
///     compute(1000, 300, 10),
///     LayoutPlan { column_count: 3, column_width: 300 }
/// );
/// ```
pub fn compute(available_width: u32, max_column_width: u32, margin_left: u32) -> LayoutPlan {
    let column_width = max_column_width.min(available_width);

    if column_width == available_width {
        return LayoutPlan {
            column_count: 1,
            column_width,
        };
    }

    let slot = u64::from(column_width) + u64::from(margin_left);
    let extra = if slot == 0 {
        0
    } else {
        u64::from(available_width - column_width) / slot
    };

    LayoutPlan {
        column_count: (1 + extra as usize).max(1),
        column_width,
    }
}
