//! View-projection types.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::timeline::CanonicalEvent;

// ============================================================================
// Options
// ============================================================================

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    Week,
    #[default]
    Month,
}

impl Granularity {
    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }
}

/// The visible-hours window of the Day/Week time grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct HourWindow {
    /// First hour shown.
    pub start_hour: u32,
    /// Number of hours shown.
    pub visible_hours: u32,
}

impl Default for HourWindow {
    fn default() -> Self {
        let view = ViewConfig::default();
        Self {
            start_hour: view.start_hour,
            visible_hours: view.visible_hours,
        }
    }
}

impl From<&ViewConfig> for HourWindow {
    fn from(view: &ViewConfig) -> Self {
        Self {
            start_hour: view.start_hour,
            visible_hours: view.visible_hours,
        }
    }
}

/// Everything a projection call needs, passed explicitly so the projector
/// stays pure and independently testable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct ViewOptions {
    pub granularity: Granularity,
    /// The date the view is anchored on: its month, its week, or itself.
    pub reference: NaiveDate,
    pub window: HourWindow,
}

impl ViewOptions {
    /// Month view anchored on `reference`, default window.
    pub fn month(reference: NaiveDate) -> Self {
        Self {
            granularity: Granularity::Month,
            reference,
            window: HourWindow::default(),
        }
    }

    /// Week view anchored on `reference`, default window.
    pub fn week(reference: NaiveDate) -> Self {
        Self {
            granularity: Granularity::Week,
            reference,
            window: HourWindow::default(),
        }
    }

    /// Day view anchored on `reference`, default window.
    pub fn day(reference: NaiveDate) -> Self {
        Self {
            granularity: Granularity::Day,
            reference,
            window: HourWindow::default(),
        }
    }

    /// Use the window from a loaded config.
    pub fn with_window(mut self, window: HourWindow) -> Self {
        self.window = window;
        self
    }
}

// ============================================================================
// Projection Output
// ============================================================================

/// A canonical event placed in a cell, with vertical-offset metadata for
/// time-grid views.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlacedEvent {
    pub event: CanonicalEvent,
    /// Minutes below the top of the visible window. `None` in Month view,
    /// where cells have no vertical time axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_minutes: Option<u32>,
}

impl PlacedEvent {
    /// Convert the offset to a caller-chosen unit-per-hour scale (pixels,
    /// rows, whatever the renderer uses).
    pub fn offset_units(&self, units_per_hour: f32) -> Option<f32> {
        self.offset_minutes
            .map(|minutes| minutes as f32 / 60.0 * units_per_hour)
    }
}

/// One calendar cell: a date and the events visible in it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DayCell {
    pub date: NaiveDate,
    pub events: Vec<PlacedEvent>,
}

/// A bucketed calendar view, keyed by cell date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ViewProjection {
    pub granularity: Granularity,
    pub reference: NaiveDate,
    pub cells: Vec<DayCell>,
}

impl ViewProjection {
    /// Find the cell for a date, if the view contains it.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == date)
    }
}
