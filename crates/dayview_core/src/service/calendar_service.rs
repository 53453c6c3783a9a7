//! Calendar facade over the day-view layout engine.
//!
//! # Responsibility
//! - Select and own the active view.
//! - Validate event configuration batches before any layout work.
//! - Forward each settled layout update to the rendering collaborator.
//!
//! # Invariants
//! - Events are never laid out before a view exists.
//! - A batch containing an invalid configuration leaves the layout untouched.
//! - Events whose styles the sink rejected are re-applied in full before the
//!   next batch is rendered, so the sink converges on the engine's layout.
//! - Every error is logged before it is returned.

use crate::layout::engine::DayViewEngine;
use crate::layout::geometry::ContainerGeometry;
use crate::model::interval::{EventConfig, Interval, ValidationError};
use crate::model::record::{EventId, LayoutRecord};
use crate::render::{apply_event_style, apply_update, RenderError, StyleSink};
use log::{debug, error, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Supported calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Day,
}

impl ViewType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
        }
    }

    /// Parses a view type name.
    pub fn parse(value: &str) -> Result<Self, CalendarError> {
        match value {
            "day" => Ok(Self::Day),
            other => Err(CalendarError::UnsupportedView(other.to_string())),
        }
    }
}

/// Errors from calendar facade operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Requested view type does not exist.
    UnsupportedView(String),
    /// Events were created before a view was set.
    ViewNotSet,
    /// One event configuration of the batch is invalid.
    InvalidEvent {
        index: usize,
        source: ValidationError,
    },
    /// Rendering collaborator rejected a style.
    Render(RenderError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedView(value) => write!(f, "calendar does not have a {value} view"),
            Self::ViewNotSet => write!(f, "a valid view must be set before events can be added"),
            Self::InvalidEvent { index, source } => {
                write!(f, "invalid event at index {index}: {source}")
            }
            Self::Render(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEvent { source, .. } => Some(source),
            Self::Render(err) => Some(err),
            Self::UnsupportedView(_) | Self::ViewNotSet => None,
        }
    }
}

impl From<RenderError> for CalendarError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

/// Calendar facade owning the active view.
#[derive(Debug)]
pub struct CalendarService {
    geometry: ContainerGeometry,
    view: Option<DayViewEngine>,
    pending_restyles: BTreeSet<EventId>,
}

impl CalendarService {
    /// Creates a calendar with no view selected.
    pub fn new(geometry: ContainerGeometry) -> Self {
        Self {
            geometry,
            view: None,
            pending_restyles: BTreeSet::new(),
        }
    }

    /// Creates a calendar and selects `view_type`.
    pub fn with_view(view_type: &str, geometry: ContainerGeometry) -> Result<Self, CalendarError> {
        let mut service = Self::new(geometry);
        service.set_view(view_type)?;
        Ok(service)
    }

    /// Selects the active view, discarding any previous layout.
    pub fn set_view(&mut self, view_type: &str) -> Result<ViewType, CalendarError> {
        let view = ViewType::parse(view_type).map_err(log_error)?;
        match view {
            ViewType::Day => self.view = Some(DayViewEngine::new(self.geometry)),
        }
        self.pending_restyles.clear();
        debug!("event=view_set module=service status=ok view={}", view.as_str());
        Ok(view)
    }

    /// Active view engine, if a view has been set.
    pub fn view(&self) -> Option<&DayViewEngine> {
        self.view.as_ref()
    }

    /// Mutable access to the active view, e.g. to install an observer.
    pub fn view_mut(&mut self) -> Option<&mut DayViewEngine> {
        self.view.as_mut()
    }

    /// Events whose latest style has not fully reached the sink yet.
    pub fn pending_restyles(&self) -> &BTreeSet<EventId> {
        &self.pending_restyles
    }

    /// Creates events from configuration and lays each one out in order.
    ///
    /// # Errors
    /// - `ViewNotSet` when no view has been selected.
    /// - `InvalidEvent` for the first invalid configuration; no event of the
    ///   batch is placed in that case.
    /// - `Render` when `sink` rejects a style; events placed before the
    ///   failing one stay placed and every event of the failing update is
    ///   re-styled on the next call.
    pub fn create_events(
        &mut self,
        configs: &[EventConfig],
        sink: &mut impl StyleSink,
    ) -> Result<Vec<LayoutRecord>, CalendarError> {
        let engine = self
            .view
            .as_mut()
            .ok_or(CalendarError::ViewNotSet)
            .map_err(log_error)?;

        let intervals = configs
            .iter()
            .enumerate()
            .map(|(index, config)| {
                Interval::try_from(*config)
                    .map_err(|source| CalendarError::InvalidEvent { index, source })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(log_error)?;

        restyle_pending(engine, &mut self.pending_restyles, sink)?;

        let mut placed = Vec::with_capacity(intervals.len());
        for interval in intervals {
            debug!(
                "event=create_event module=service status=start start={} end={}",
                interval.start(),
                interval.end()
            );
            let update = engine.add_event(interval);
            if let Err(err) = apply_update(&update, sink) {
                self.pending_restyles.extend(update.affected_ids());
                return Err(log_error(err.into()));
            }
            placed.push(update.record);
        }
        Ok(placed)
    }
}

fn restyle_pending(
    engine: &DayViewEngine,
    pending: &mut BTreeSet<EventId>,
    sink: &mut impl StyleSink,
) -> Result<(), CalendarError> {
    while let Some(id) = pending.first().copied() {
        if let Some(style) = engine.style_of(id) {
            apply_event_style(id, &style, sink)
                .map_err(CalendarError::from)
                .map_err(log_error)?;
        }
        pending.remove(&id);
        info!("event=restyle_pending module=service status=ok id={id}");
    }
    Ok(())
}

fn log_error(err: CalendarError) -> CalendarError {
    error!("event=calendar_error module=service status=error message={err}");
    err
}
