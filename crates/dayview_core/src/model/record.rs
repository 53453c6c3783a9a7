//! Per-event layout state.
//!
//! # Responsibility
//! - Hold the column, lane count and neighbor set of one placed event.
//!
//! # Invariants
//! - `id` is assigned once, in arrival order, and never reused.
//! - `lane_count >= column + 1`.
//! - `neighbors` is symmetric across the engine: if A lists B, B lists A.

use crate::model::interval::Interval;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Stable identifier of a placed event, equal to its arrival index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(pub usize);

impl EventId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable layout state for one event.
///
/// Created by the engine on insertion; `column` and `lane_count` may change
/// as later overlapping events arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRecord {
    pub(crate) id: EventId,
    pub(crate) interval: Interval,
    pub(crate) column: usize,
    pub(crate) lane_count: usize,
    pub(crate) neighbors: BTreeSet<EventId>,
}

impl LayoutRecord {
    /// Creates an unplaced record occupying column 0 of a single lane.
    pub(crate) fn new(id: EventId, interval: Interval) -> Self {
        Self {
            id,
            interval,
            column: 0,
            lane_count: 1,
            neighbors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Zero-based lane currently occupied.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of lanes in this event's overlap group.
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Ids of every other placed event overlapping this one.
    pub fn neighbors(&self) -> &BTreeSet<EventId> {
        &self.neighbors
    }
}
