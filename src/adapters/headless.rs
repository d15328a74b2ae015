//! Headless item factory.
//!
//! Produces [`Card`]s whose rendered height is computed instead of read
//! back from a rendering engine: the image scaled to the item width, plus the
//! title word-wrapped at a fixed glyph width.

use unicode_width::UnicodeWidthStr;

use crate::feed::Thread;
use crate::traits::{ItemFactory, LoadedImage, Renderable};

/// Text metrics used to measure a card's caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Width of one terminal cell of text, in pixels
    pub cell_width: u32,
    /// Height of one line of text, in pixels
    pub line_height: u32,
    /// Vertical padding around the caption, in pixels
    pub caption_padding: u32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            cell_width: 7,
            line_height: 18,
            caption_padding: 8,
        }
    }
}

/// A materialized board item: a thread shown with its loaded image.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub thread: Thread,
    pub image: LoadedImage,
    pub fullsize_url: Option<String>,
    metrics: TextMetrics,
}

impl Card {
    /// Where clicking the card leads: the full-size image when the provider
    /// offers one, otherwise the loaded image.
    pub fn link_url(&self) -> &str {
        self.fullsize_url
            .as_deref()
            .unwrap_or(self.image.source_url.as_str())
    }

    /// Number of lines the title wraps to at `item_width`.
    pub fn title_lines(&self, item_width: u32) -> u32 {
        wrap_line_count(&self.thread.title, self.cells_per_line(item_width))
    }

    fn cells_per_line(&self, item_width: u32) -> usize {
        (item_width / self.metrics.cell_width.max(1)).max(1) as usize
    }
}

impl Renderable for Card {
    fn rendered_height(&self, item_width: u32) -> u32 {
        let lines = self.title_lines(item_width);
        let caption = if lines == 0 {
            0
        } else {
            lines
                .saturating_mul(self.metrics.line_height)
                .saturating_add(self.metrics.caption_padding)
        };
        self.image.scaled_height(item_width).saturating_add(caption)
    }
}

/// Greedy word wrap; words longer than a line are broken across lines.
fn wrap_line_count(text: &str, cells_per_line: usize) -> u32 {
    let mut lines = 0u32;
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let width = UnicodeWidthStr::width(word);
        if used > 0 && used + 1 + width <= cells_per_line {
            used += 1 + width;
            continue;
        }
        // start a new line (or several for an overlong word)
        let spans = width.div_ceil(cells_per_line).max(1);
        lines += spans as u32;
        used = width - (spans - 1) * cells_per_line;
    }
    lines
}

/// Factory producing [`Card`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessItemFactory {
    metrics: TextMetrics,
}

impl HeadlessItemFactory {
    pub fn new(metrics: TextMetrics) -> Self {
        Self { metrics }
    }
}

impl ItemFactory for HeadlessItemFactory {
    type Item = Card;

    fn materialize(
        &self,
        thread: &Thread,
        image: &LoadedImage,
        fullsize_url: Option<&str>,
    ) -> Card {
        Card {
            thread: thread.clone(),
            image: image.clone(),
            fullsize_url: fullsize_url.map(str::to_string),
            metrics: self.metrics,
        }
    }
}
