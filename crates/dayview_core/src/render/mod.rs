//! Rendering collaborator contract.
//!
//! # Responsibility
//! - Define how computed event styles reach whatever owns the visual
//!   elements.
//! - Provide an in-memory style table for headless callers.
//!
//! # Invariants
//! - Unknown style property names are rejected, never silently ignored.
//! - Every restyled event receives all four properties, `top`, `height`,
//!   `left`, `width`, events in id order.

pub mod table;

use crate::layout::engine::LayoutUpdate;
use crate::layout::geometry::EventStyle;
use crate::model::record::EventId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use table::StyleTable;

/// Style properties the layout engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    Top,
    Height,
    Left,
    Width,
}

impl StyleProperty {
    /// CSS property name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Height => "height",
            Self::Left => "left",
            Self::Width => "width",
        }
    }

    /// Parses a CSS property name.
    pub fn parse(name: &str) -> Result<Self, RenderError> {
        match name {
            "top" => Ok(Self::Top),
            "height" => Ok(Self::Height),
            "left" => Ok(Self::Left),
            "width" => Ok(Self::Width),
            other => Err(RenderError::UnsupportedProperty(other.to_string())),
        }
    }
}

impl Display for StyleProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of computed pixel styles.
pub trait StyleSink {
    /// Sets one pixel-valued style property on the element of event `id`.
    ///
    /// # Errors
    /// - Returns `RenderError::UnsupportedProperty` when the element has no
    ///   style property called `property`.
    fn apply_style(&mut self, id: EventId, property: &str, px: f64) -> Result<(), RenderError>;
}

/// Pushes every style of one layout update to `sink`.
///
/// Stops at the first rejected property and returns its error.
pub fn apply_update(update: &LayoutUpdate, sink: &mut impl StyleSink) -> Result<(), RenderError> {
    for (id, style) in &update.restyled {
        apply_event_style(*id, style, sink)?;
    }
    Ok(())
}

/// Pushes all four properties of one event's style to `sink`.
pub fn apply_event_style(
    id: EventId,
    style: &EventStyle,
    sink: &mut impl StyleSink,
) -> Result<(), RenderError> {
    for (property, px) in [
        (StyleProperty::Top, style.top),
        (StyleProperty::Height, style.height),
        (StyleProperty::Left, style.left),
        (StyleProperty::Width, style.width),
    ] {
        sink.apply_style(id, property.as_str(), px)?;
    }
    Ok(())
}

/// Formats a pixel value the way CSS expects it, e.g. `300px`.
pub fn format_px(px: f64) -> String {
    format!("{px}px")
}

/// Rendering collaborator errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    UnsupportedProperty(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedProperty(name) => {
                write!(f, "cannot set property {name} on the element's style")
            }
        }
    }
}

impl Error for RenderError {}
