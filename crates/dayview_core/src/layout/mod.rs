//! Day-view layout engine.
//!
//! # Responsibility
//! - Detect temporal overlap between events.
//! - Assign each event a lane and keep its overlap group's lane counts
//!   consistent as new events arrive.
//! - Map lanes onto container pixels.
//!
//! # Invariants
//! - Two overlapping events never share a column.
//! - For every event, `lane_count >= 1 + max(column of its neighbors)`.
//! - Replaying the same arrival sequence yields the same layout.

pub mod columns;
pub mod engine;
pub mod geometry;
pub mod overlap;
