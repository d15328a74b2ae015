//! Item factory producing fixed-height items.

use std::collections::HashMap;

use crate::feed::Thread;
use crate::traits::{ItemFactory, LoadedImage, Renderable};

/// Item whose rendered height does not depend on width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedItem {
    pub thread_id: String,
    pub height: u32,
    pub fullsize_url: Option<String>,
}

impl Renderable for FixedItem {
    fn rendered_height(&self, _item_width: u32) -> u32 {
        self.height
    }
}

/// Factory that gives every item a configured height, defaulting to the
/// loaded image's pixel height.
#[derive(Debug, Clone, Default)]
pub struct FixedHeightFactory {
    heights: HashMap<String, u32>,
}

impl FixedHeightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the item for `thread_id` at `height`.
    pub fn with_height(mut self, thread_id: &str, height: u32) -> Self {
        self.heights.insert(thread_id.to_string(), height);
        self
    }
}

impl ItemFactory for FixedHeightFactory {
    type Item = FixedItem;

    fn materialize(
        &self,
        thread: &Thread,
        image: &LoadedImage,
        fullsize_url: Option<&str>,
    ) -> FixedItem {
        FixedItem {
            thread_id: thread.id.clone(),
            height: self.heights.get(&thread.id).copied().unwrap_or(image.height),
            fullsize_url: fullsize_url.map(str::to_string),
        }
    }
}
