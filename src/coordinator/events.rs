//! Notifications emitted by the coordinator.

use crate::layout::LayoutChange;

use super::counter::{UnitId, UnitKind, UnitOutcome};

/// Payload of a "request completed" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestCompletion {
    pub unit: UnitId,
    pub kind: UnitKind,
    pub outcome: UnitOutcome,
    /// Outstanding units after this one settled
    pub running_requests: usize,
    /// For image loads, whether an image was accepted onto the board;
    /// `None` for page fetches
    pub accepted_image: Option<bool>,
}

/// Notifications for the board's consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// Emitted before each page fetch is dispatched
    AboutToLoadMore,
    /// Emitted once per unit after it reaches a terminal state
    RequestCompleted(RequestCompletion),
    /// The feed could not be reached in time
    ConnectivityAlert { message: String },
    /// A debounced relayout changed the geometry
    LayoutChanged(LayoutChange),
}

impl BoardEvent {
    /// The completion payload, if this is a completion.
    pub fn completion(&self) -> Option<&RequestCompletion> {
        match self {
            BoardEvent::RequestCompleted(completion) => Some(completion),
            _ => None,
        }
    }
}
