//! First-fit column assignment over an event's overlap neighborhood.
//!
//! # Responsibility
//! - Pick the lowest column not occupied by any neighbor of a new event.
//! - Report which neighbors must widen their lane count to make room.
//!
//! # Invariants
//! - Only neighbors are considered: events that do not overlap the new one
//!   may legally share its column.
//! - The chosen column is unique: columns are scanned in ascending order.
//! - After placement every neighbor has `lane_count >= column + 1`.

use crate::model::record::{EventId, LayoutRecord};
use std::collections::BTreeMap;

/// Result of placing one new event into its neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Column assigned to the new event.
    pub column: usize,
    /// Lane count assigned to the new event.
    pub lane_count: usize,
    /// Neighbors whose lane count grows, with their new lane count.
    pub widened: Vec<(EventId, usize)>,
}

/// Occupied columns of one new event's neighborhood.
///
/// Maps each taken column to the first neighbor (in arrival order) seen
/// occupying it. Built fresh for every insertion and owned by the caller,
/// never by individual records.
#[derive(Debug, Clone, Default)]
pub struct ColumnAssigner<'a> {
    taken: BTreeMap<usize, EventId>,
    neighbors: Vec<&'a LayoutRecord>,
}

impl<'a> ColumnAssigner<'a> {
    /// Collects the columns occupied by `neighbors`.
    pub fn from_neighbors(neighbors: impl IntoIterator<Item = &'a LayoutRecord>) -> Self {
        let mut assigner = Self::default();
        for neighbor in neighbors {
            assigner
                .taken
                .entry(neighbor.column())
                .or_insert(neighbor.id());
            assigner.neighbors.push(neighbor);
        }
        assigner
    }

    #[cfg(test)]
    fn owner_of(&self, column: usize) -> Option<EventId> {
        self.taken.get(&column).copied()
    }

    /// Number of distinct columns occupied among the neighbors.
    pub fn occupied_columns(&self) -> usize {
        self.taken.len()
    }

    /// Lowest column not occupied by any neighbor.
    pub fn first_free_column(&self) -> usize {
        // There are at most `taken.len()` occupied columns, so one of
        // `0..=taken.len()` is always free.
        (0..=self.taken.len())
            .find(|column| !self.taken.contains_key(column))
            .unwrap_or(self.taken.len())
    }

    /// Places a new event and computes the resulting lane counts.
    pub fn place(&self) -> Placement {
        let column = self.first_free_column();
        let highest_taken = self.taken.keys().next_back().copied();
        let lane_count = match highest_taken {
            Some(highest) => column.max(highest) + 1,
            None => column + 1,
        };

        let required = column + 1;
        let widened = self
            .neighbors
            .iter()
            .filter(|neighbor| neighbor.lane_count() < required)
            .map(|neighbor| (neighbor.id(), required))
            .collect();

        Placement {
            column,
            lane_count,
            widened,
        }
    }
}
