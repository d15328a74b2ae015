//! Item materialization and measurement.

use crate::feed::Thread;

use super::image::LoadedImage;

/// Anything that can report its rendered height once attached to a column.
///
/// Column heights are re-measured through this after every append, so an
/// implementation must account for everything that affects layout: scaled
/// image height, wrapped title lines, captions.
pub trait Renderable {
    /// Height in pixels when rendered at `item_width`.
    fn rendered_height(&self, item_width: u32) -> u32;
}

/// Builds the renderable item for an accepted image.
///
/// The board treats the produced item as opaque; it only measures it.
pub trait ItemFactory {
    /// Item type produced by this factory.
    type Item: Renderable;

    /// Materialize the item for `thread`, shown with `image` and linking to
    /// `fullsize_url` when the provider offers one.
    fn materialize(
        &self,
        thread: &Thread,
        image: &LoadedImage,
        fullsize_url: Option<&str>,
    ) -> Self::Item;
}
