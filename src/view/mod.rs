//! Projection of canonical events into day/week/month calendar cells.
//!
//! The projector is pure: the current reference date, granularity and
//! visible-hours window arrive as an explicit [`ViewOptions`] on every call,
//! never as ambient state.

mod project;
mod types;

pub use project::{placement_time, project, DEFAULT_PLACEMENT_HOUR};
pub use types::{
    DayCell, Granularity, HourWindow, PlacedEvent, ViewOptions, ViewProjection,
};
