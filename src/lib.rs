//! Concierge: the unified calendar engine of the hotel back-office
//! dashboard.
//!
//! Five heterogeneous record collections (personal agenda, spa bookings,
//! CRM follow-up leads, action tasks, multi-day group stays) are normalized
//! into one canonical timeline, projected into day/week/month cells, and
//! wired back to the correct domain update when an event block is dragged
//! to a new slot.

pub mod config;
pub mod directory;
pub mod drag;
pub mod engine;
pub mod error;
pub mod records;
pub mod route;
pub mod timeline;
pub mod view;

pub use config::{Config, DragConfig, ViewConfig};
pub use directory::contact_display_name;
pub use drag::{
    GestureFeedback, GestureOutcome, GridCell, MoveIntent, PointerEvent, RescheduleSession,
    TouchEvent,
};
pub use engine::CalendarEngine;
pub use error::{ConciergeError, ConfigError, RecordError, Result};
pub use records::{
    ActionTask, AgendaEntry, CrmLead, GroupStay, RecordSet, SpaBooking, StayStatus,
};
pub use route::{route, InstantSink, SlotSink, SpanSink, UpdateSinks};
pub use timeline::{
    aggregate, normalize, CanonicalEvent, ClockTime, Domain, DomainCount, DomainToggles, EventKey,
    RawDate, SourceRecord, StyleToken, TimelineStats, ALL_DAY_LABEL,
};
pub use view::{
    placement_time, project, DayCell, Granularity, HourWindow, PlacedEvent, ViewOptions,
    ViewProjection, DEFAULT_PLACEMENT_HOUR,
};
