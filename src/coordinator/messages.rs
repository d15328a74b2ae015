//! Messages delivered to the coordinator's queue by spawned work.

use crate::error::{ImageLoadError, TransportError};
use crate::feed::{FeedPage, ImageSource, Thread};
use crate::traits::LoadedImage;

use super::counter::UnitId;

/// Terminal outcomes of spawned units, plus debounced layout requests.
///
/// Every unit task sends exactly one `*Settled` message.
#[derive(Debug, Clone)]
pub enum LoadMessage {
    /// A page fetch finished
    PageSettled {
        unit: UnitId,
        result: Result<FeedPage, TransportError>,
    },
    /// An image load finished
    ImageSettled {
        unit: UnitId,
        thread: Thread,
        source: ImageSource,
        result: Result<LoadedImage, ImageLoadError>,
    },
    /// The resize debounce window elapsed
    Relayout { available_width: u32 },
}

impl LoadMessage {
    /// The unit this message settles, if any.
    pub fn unit(&self) -> Option<UnitId> {
        match self {
            LoadMessage::PageSettled { unit, .. } | LoadMessage::ImageSettled { unit, .. } => {
                Some(*unit)
            }
            LoadMessage::Relayout { .. } => None,
        }
    }
}
