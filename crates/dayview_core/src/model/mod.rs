//! Day-view domain model.
//!
//! # Responsibility
//! - Define the time interval value placed on the day view.
//! - Define the mutable per-event layout state tracked by the engine.
//!
//! # Invariants
//! - Every `Interval` satisfies `end > start`; there is no way to build one
//!   that does not.
//! - Every placed event is identified by a stable `EventId`.

pub mod interval;
pub mod record;
