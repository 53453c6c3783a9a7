//! In-memory style sink.

use crate::layout::geometry::EventStyle;
use crate::model::record::EventId;
use crate::render::{format_px, RenderError, StyleProperty, StyleSink};
use std::collections::BTreeMap;

/// Style table keyed by event id, recording every applied property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    styles: BTreeMap<EventId, BTreeMap<StyleProperty, f64>>,
    history: Vec<(EventId, StyleProperty, f64)>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value of one property.
    pub fn get(&self, id: EventId, property: StyleProperty) -> Option<f64> {
        self.styles.get(&id)?.get(&property).copied()
    }

    /// Full style of one event, once all four properties have been applied.
    pub fn style(&self, id: EventId) -> Option<EventStyle> {
        Some(EventStyle {
            top: self.get(id, StyleProperty::Top)?,
            height: self.get(id, StyleProperty::Height)?,
            left: self.get(id, StyleProperty::Left)?,
            width: self.get(id, StyleProperty::Width)?,
        })
    }

    /// Inline CSS for one event, properties in declaration order.
    pub fn css(&self, id: EventId) -> Option<String> {
        let properties = self.styles.get(&id)?;
        Some(
            properties
                .iter()
                .map(|(property, px)| format!("{property}: {}", format_px(*px)))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Every applied property in call order.
    pub fn history(&self) -> &[(EventId, StyleProperty, f64)] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl StyleSink for StyleTable {
    fn apply_style(&mut self, id: EventId, property: &str, px: f64) -> Result<(), RenderError> {
        let property = StyleProperty::parse(property)?;
        self.styles.entry(id).or_default().insert(property, px);
        self.history.push((id, property, px));
        Ok(())
    }
}
