//! Day-view layout orchestration.
//!
//! # Responsibility
//! - Own the ordered list of placed events for one day view.
//! - Run overlap detection, column assignment and geometry mapping for each
//!   inserted event.
//! - Notify an optional observer once the layout has settled.
//!
//! # Invariants
//! - Records are appended in arrival order and never removed or reordered.
//! - `add_event` either fully updates every affected record or (when the
//!   interval is rejected upstream) is never entered.
//! - The observer runs synchronously, after all state changes are applied.

use crate::layout::columns::ColumnAssigner;
use crate::layout::geometry::{to_style, ContainerGeometry, EventStyle, LayoutMetrics};
use crate::layout::overlap::find_overlaps;
use crate::model::interval::Interval;
use crate::model::record::{EventId, LayoutRecord};
use log::debug;
use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

/// Outcome of one `add_event` call.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutUpdate {
    /// The newly placed event.
    pub record: LayoutRecord,
    /// Fresh styles for the new event and every neighbor whose lane count
    /// changed, in id order.
    pub restyled: Vec<(EventId, EventStyle)>,
}

impl LayoutUpdate {
    /// Ids whose styles must be re-applied.
    pub fn affected_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.restyled.iter().map(|(id, _)| *id)
    }
}

/// Hook invoked after every `add_event` once the layout has settled.
pub trait LayoutObserver {
    fn on_layout_changed(&mut self, update: &LayoutUpdate);
}

impl<F> LayoutObserver for F
where
    F: FnMut(&LayoutUpdate),
{
    fn on_layout_changed(&mut self, update: &LayoutUpdate) {
        self(update)
    }
}

/// Incremental lane layout for a single day.
pub struct DayViewEngine {
    geometry: ContainerGeometry,
    metrics: LayoutMetrics,
    records: Vec<LayoutRecord>,
    observer: Option<Box<dyn LayoutObserver>>,
}

impl DayViewEngine {
    /// Creates an empty engine for a container with the given geometry.
    pub fn new(geometry: ContainerGeometry) -> Self {
        let metrics = geometry.metrics();
        debug!(
            "event=engine_init module=layout status=ok y_base={} y_offset={} x_base={} x_offset={}",
            metrics.y_base, metrics.y_offset, metrics.x_base, metrics.x_offset
        );
        Self {
            geometry,
            metrics,
            records: Vec::new(),
            observer: None,
        }
    }

    /// Installs the layout-changed hook, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn LayoutObserver>) {
        self.observer = Some(observer);
    }

    /// Removes the layout-changed hook.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Places one event and re-styles every event whose lane count changed.
    pub fn add_event(&mut self, interval: Interval) -> LayoutUpdate {
        let id = EventId(self.records.len());
        let neighbor_ids = find_overlaps(&interval, &self.records);

        let (placement, occupied) = {
            let assigner = ColumnAssigner::from_neighbors(
                neighbor_ids.iter().map(|neighbor| &self.records[neighbor.index()]),
            );
            (assigner.place(), assigner.occupied_columns())
        };

        let mut affected = BTreeSet::from([id]);
        for neighbor in &neighbor_ids {
            self.records[neighbor.index()].neighbors.insert(id);
        }
        for (neighbor, lane_count) in &placement.widened {
            self.records[neighbor.index()].lane_count = *lane_count;
            affected.insert(*neighbor);
        }

        let mut record = LayoutRecord::new(id, interval);
        record.column = placement.column;
        record.lane_count = placement.lane_count;
        record.neighbors = neighbor_ids.into_iter().collect();
        self.records.push(record.clone());

        let restyled = affected
            .into_iter()
            .map(|affected_id| {
                let style = to_style(&self.records[affected_id.index()], &self.metrics);
                (affected_id, style)
            })
            .collect::<Vec<_>>();

        debug!(
            "event=layout_add module=layout status=ok id={} start={} end={} column={} lanes={} neighbors={} occupied={} restyled={}",
            id,
            interval.start(),
            interval.end(),
            record.column,
            record.lane_count,
            record.neighbors.len(),
            occupied,
            restyled.len()
        );

        let update = LayoutUpdate { record, restyled };
        if let Some(observer) = self.observer.as_mut() {
            observer.on_layout_changed(&update);
        }
        update
    }

    pub fn geometry(&self) -> &ContainerGeometry {
        &self.geometry
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// All placed records in arrival order.
    pub fn records(&self) -> &[LayoutRecord] {
        &self.records
    }

    pub fn record(&self, id: EventId) -> Option<&LayoutRecord> {
        self.records.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current style of one event.
    pub fn style_of(&self, id: EventId) -> Option<EventStyle> {
        self.record(id)
            .map(|record| to_style(record, &self.metrics))
    }

    /// Current style of every event, in id order.
    pub fn snapshot(&self) -> Vec<(EventId, EventStyle)> {
        self.records
            .iter()
            .map(|record| (record.id(), to_style(record, &self.metrics)))
            .collect()
    }
}

impl Debug for DayViewEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayViewEngine")
            .field("geometry", &self.geometry)
            .field("records", &self.records)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
