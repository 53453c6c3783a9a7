//! Core layout logic for the day-view calendar.
//! This crate is the single source of truth for lane placement invariants.

pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use layout::columns::{ColumnAssigner, Placement};
pub use layout::engine::{DayViewEngine, LayoutObserver, LayoutUpdate};
pub use layout::geometry::{
    to_style, ContainerGeometry, EventStyle, GeometryError, LayoutMetrics,
    DEFAULT_MINUTES_IN_VIEW,
};
pub use layout::overlap::{find_overlaps, is_parallel};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::interval::{EventConfig, Interval, Minutes, ValidationError};
pub use model::record::{EventId, LayoutRecord};
pub use render::{
    apply_event_style, apply_update, format_px, RenderError, StyleProperty, StyleSink, StyleTable,
};
pub use service::calendar_service::{CalendarError, CalendarService, ViewType};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
