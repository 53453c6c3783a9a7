//! Event time interval model.
//!
//! # Responsibility
//! - Describe one event's temporal extent in minutes from midnight.
//! - Validate caller-supplied event configuration before layout.
//!
//! # Invariants
//! - `end > start` for every constructed `Interval`.
//! - Deserialization goes through the same validation as construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minutes elapsed since the start of the day.
pub type Minutes = u32;

/// Immutable time range of one event, `[start, end)` in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventConfig")]
pub struct Interval {
    start: Minutes,
    end: Minutes,
}

impl Interval {
    /// Creates an interval.
    ///
    /// # Errors
    /// - Returns `ValidationError::InvalidRange` when `end <= start`.
    pub fn new(start: Minutes, end: Minutes) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Minutes {
        self.start
    }

    pub fn end(&self) -> Minutes {
        self.end
    }

    /// Event length in minutes. Always positive.
    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Caller-supplied event configuration.
///
/// Both bounds are optional here so that a missing bound can be reported
/// precisely instead of failing as a generic parse error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default)]
    pub start: Option<Minutes>,
    #[serde(default)]
    pub end: Option<Minutes>,
}

impl EventConfig {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

impl TryFrom<EventConfig> for Interval {
    type Error = ValidationError;

    fn try_from(value: EventConfig) -> Result<Self, Self::Error> {
        let start = value.start.ok_or(ValidationError::MissingStart)?;
        let end = value.end.ok_or(ValidationError::MissingEnd)?;
        Interval::new(start, end)
    }
}

/// Event construction errors. Raised before the layout engine is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingStart,
    MissingEnd,
    InvalidRange { start: Minutes, end: Minutes },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStart => write!(f, "calendar events require a start time"),
            Self::MissingEnd => write!(f, "calendar events require an end time"),
            Self::InvalidRange { start, end } => write!(
                f,
                "calendar event end ({end}) must occur after its start ({start})"
            ),
        }
    }
}

impl Error for ValidationError {}
