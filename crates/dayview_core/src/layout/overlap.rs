//! Interval overlap detection.

use crate::model::interval::Interval;
use crate::model::record::{EventId, LayoutRecord};

/// Returns whether two events are parallel (overlap in time).
///
/// Intervals are half-open, so an event ending at minute 600 and another
/// starting at minute 600 are not parallel. Identical ranges always are.
/// The predicate is symmetric.
pub fn is_parallel(a: &Interval, b: &Interval) -> bool {
    a.start() < b.end() && b.start() < a.end()
}

/// Returns ids of every existing record parallel to `candidate`, in arrival
/// order.
pub fn find_overlaps(candidate: &Interval, existing: &[LayoutRecord]) -> Vec<EventId> {
    existing
        .iter()
        .filter(|record| is_parallel(candidate, &record.interval()))
        .map(LayoutRecord::id)
        .collect()
}
