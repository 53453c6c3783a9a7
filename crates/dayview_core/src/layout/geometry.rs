//! Container geometry and lane-to-pixel mapping.
//!
//! # Responsibility
//! - Validate the hosting container's rendered geometry once, up front.
//! - Convert an event's interval, column and lane count into pixel styles.
//!
//! # Invariants
//! - Geometry is read once at engine construction; resizes are not tracked.
//! - `width * lane_count == container width - 2 * horizontal padding` for
//!   every event.

use crate::model::record::LayoutRecord;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minutes spanned by the container's full height: the first 12 hours of
/// the day, counted from midnight.
pub const DEFAULT_MINUTES_IN_VIEW: u32 = 60 * 12;

/// Rendered geometry of the container hosting the day view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerGeometry {
    pub height: f64,
    pub width: f64,
    #[serde(default)]
    pub padding_left: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default = "default_minutes_in_view")]
    pub minutes_in_view: u32,
}

fn default_minutes_in_view() -> u32 {
    DEFAULT_MINUTES_IN_VIEW
}

impl ContainerGeometry {
    /// Creates validated geometry spanning `DEFAULT_MINUTES_IN_VIEW`.
    ///
    /// # Errors
    /// - Returns an error when `height` or `width` is not positive.
    /// - Returns an error when a padding is negative.
    /// - Returns an error when horizontal padding leaves no drawable width.
    pub fn new(
        height: f64,
        width: f64,
        padding_left: f64,
        padding_top: f64,
    ) -> Result<Self, GeometryError> {
        let geometry = Self {
            height,
            width,
            padding_left,
            padding_top,
            minutes_in_view: DEFAULT_MINUTES_IN_VIEW,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Returns a copy spanning `minutes` instead of the default view length.
    pub fn with_minutes_in_view(mut self, minutes: u32) -> Result<Self, GeometryError> {
        self.minutes_in_view = minutes;
        self.validate()?;
        Ok(self)
    }

    /// Checks every geometry invariant.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (name, value) in [("height", self.height), ("width", self.width)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::NonPositiveDimension { name, value });
            }
        }
        for (name, value) in [
            ("padding_left", self.padding_left),
            ("padding_top", self.padding_top),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GeometryError::NegativePadding { name, value });
            }
        }
        if self.width - 2.0 * self.padding_left <= 0.0 {
            return Err(GeometryError::NoDrawableWidth {
                width: self.width,
                padding_left: self.padding_left,
            });
        }
        if self.minutes_in_view == 0 {
            return Err(GeometryError::EmptyTimeSpan);
        }
        Ok(())
    }

    /// Derives the per-minute and per-lane scale used for every event.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            y_base: self.height / f64::from(self.minutes_in_view),
            y_offset: self.padding_top,
            x_base: self.width,
            x_offset: self.padding_left,
        }
    }
}

/// Scale factors derived once from `ContainerGeometry`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    /// Pixels per minute.
    pub y_base: f64,
    /// Top padding of the container.
    pub y_offset: f64,
    /// Full container width.
    pub x_base: f64,
    /// Left (and right) padding of the container.
    pub x_offset: f64,
}

impl LayoutMetrics {
    /// Width available to lanes after horizontal padding.
    pub fn drawable_width(&self) -> f64 {
        self.x_base - self.x_offset * 2.0
    }
}

/// Absolute pixel placement of one event inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventStyle {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

/// Computes the pixel placement of `record`.
pub fn to_style(record: &LayoutRecord, metrics: &LayoutMetrics) -> EventStyle {
    let interval = record.interval();
    let width = metrics.drawable_width() / record.lane_count() as f64;
    EventStyle {
        top: f64::from(interval.start()) * metrics.y_base + metrics.y_offset,
        height: f64::from(interval.duration()) * metrics.y_base,
        left: width * record.column() as f64 + metrics.x_offset,
        width,
    }
}

/// Container geometry validation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    NonPositiveDimension { name: &'static str, value: f64 },
    NegativePadding { name: &'static str, value: f64 },
    NoDrawableWidth { width: f64, padding_left: f64 },
    EmptyTimeSpan,
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDimension { name, value } => {
                write!(f, "container {name} must be positive, got {value}")
            }
            Self::NegativePadding { name, value } => {
                write!(f, "container {name} must not be negative, got {value}")
            }
            Self::NoDrawableWidth {
                width,
                padding_left,
            } => write!(
                f,
                "container width {width} leaves no room after padding {padding_left} on both sides"
            ),
            Self::EmptyTimeSpan => write!(f, "container must span at least one minute"),
        }
    }
}

impl Error for GeometryError {}
