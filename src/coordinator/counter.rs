//! In-flight request bookkeeping.
//!
//! The running count is the number of outstanding unit ids rather than a
//! bare integer, so a unit can only be settled once and the count can never
//! go negative.

use std::collections::HashMap;
use std::fmt;

/// Identifier of one dispatched unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of work a unit performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    PageFetch,
    ImageLoad,
}

/// Terminal state of a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOutcome {
    Succeeded,
    Failed,
    Cancelled,
    TimedOut,
}

/// Tracks dispatched-but-not-yet-terminal units.
#[derive(Debug, Default)]
pub struct RequestCounter {
    next_id: u64,
    outstanding: HashMap<UnitId, UnitKind>,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly dispatched unit and return its id.
    pub fn dispatch(&mut self, kind: UnitKind) -> UnitId {
        self.next_id += 1;
        let id = UnitId(self.next_id);
        self.outstanding.insert(id, kind);
        id
    }

    /// Settle a unit. Returns its kind, or `None` if the unit was unknown or
    /// already settled, in which case the count is unchanged.
    pub fn settle(&mut self, id: UnitId) -> Option<UnitKind> {
        self.outstanding.remove(&id)
    }

    pub fn is_outstanding(&self, id: UnitId) -> bool {
        self.outstanding.contains_key(&id)
    }

    /// Number of outstanding units.
    pub fn running(&self) -> usize {
        self.outstanding.len()
    }

    /// Number of outstanding units of `kind`.
    pub fn running_of(&self, kind: UnitKind) -> usize {
        self.outstanding.values().filter(|k| **k == kind).count()
    }

    /// True when no work is outstanding.
    pub fn is_settled(&self) -> bool {
        self.outstanding.is_empty()
    }
}
