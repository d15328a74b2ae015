//! CSS rules for the current column geometry.

/// Class applied to each column container.
pub const COLUMN_CLASS: &str = "board-column";

/// Class applied to each item inside a column.
pub const ITEM_CLASS: &str = "board-item";

/// The single shared style resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    text: String,
    revision: u64,
}

impl StyleSheet {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the text has changed since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Turns column geometry into CSS text.
///
/// The style sheet is created on the first projection and updated in place
/// afterwards; projecting identical values leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct StyleProjector {
    item_padding: u32,
    sheet: Option<StyleSheet>,
}

impl StyleProjector {
    pub fn new(item_padding: u32) -> Self {
        Self {
            item_padding,
            sheet: None,
        }
    }

    pub fn sheet(&self) -> Option<&StyleSheet> {
        self.sheet.as_ref()
    }

    /// Item width for a column width.
    pub fn item_width(&self, column_width: u32) -> u32 {
        column_width.saturating_sub(self.item_padding)
    }

    /// Project the geometry onto the style sheet and return it.
    pub fn project(&mut self, column_width: u32, margin_left: u32) -> &StyleSheet {
        let text = render_rules(column_width, margin_left, self.item_width(column_width));
        let sheet = self.sheet.get_or_insert_with(|| StyleSheet {
            text: String::new(),
            revision: 0,
        });
        if sheet.text != text {
            sheet.text = text;
            sheet.revision += 1;
        }
        sheet
    }
}

/// Render the column and item rules.
pub fn render_rules(column_width: u32, margin_left: u32, item_width: u32) -> String {
    format!(
        ".{COLUMN_CLASS} {{ margin-left: {margin_left}px; width: {column_width}px; }}\n\
         .{ITEM_CLASS} {{ width: {item_width}px; }}\n"
    )
}
