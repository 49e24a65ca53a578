//! Domain adapters: one pure conversion per source record type.
//!
//! Each adapter turns one raw record into zero-or-one canonical events,
//! applying that domain's display rules. Malformed input short-circuits to
//! `None`; the aggregator never sees a partially-built event and a single
//! bad record never takes down the timeline.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::records::{ActionTask, AgendaEntry, CrmLead, GroupStay, SpaBooking, StayStatus};

use super::datetime::{normalize, ClockTime};
use super::identity::{Domain, EventKey};
use super::types::{CanonicalEvent, SourceRecord, StyleToken};

/// Display label for events without a usable time of day.
pub const ALL_DAY_LABEL: &str = "All Day";

/// Fallback display time for agenda entries without their own label.
const MIDNIGHT_LABEL: &str = "00:00";

/// Replace the clock-time component of an instant.
fn at_clock(instant: DateTime<Utc>, clock: ClockTime) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(clock.hour, clock.minute, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&instant.date_naive().and_time(time))
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

// ============================================================================
// Adapters
// ============================================================================

/// Adapt a personal agenda entry. Dropped when its start instant is
/// unparseable.
pub fn adapt_agenda(record: &AgendaEntry) -> Option<CanonicalEvent> {
    let Some(start) = normalize(record.starts_at.as_ref()) else {
        debug!(id = %record.id, "dropping agenda entry with unparseable start");
        return None;
    };
    let display_time = non_empty(record.time_label.as_ref())
        .unwrap_or(MIDNIGHT_LABEL)
        .to_string();
    Some(CanonicalEvent {
        key: EventKey::new(Domain::Agenda, record.id.clone()),
        start,
        end: None,
        display_time,
        title: non_empty(record.title.as_ref())
            .unwrap_or("Untitled")
            .to_string(),
        style: StyleToken::Sky,
        original: SourceRecord::Agenda(record.clone()),
    })
}

/// Adapt a spa booking. Spa records store date and time separately;
/// absence of either drops the record.
pub fn adapt_spa(record: &SpaBooking) -> Option<CanonicalEvent> {
    let Some(date) = normalize(record.date.as_ref()) else {
        debug!(id = %record.id, "dropping spa booking with unparseable date");
        return None;
    };
    let Some(clock) = non_empty(record.time.as_ref()).and_then(ClockTime::parse) else {
        debug!(id = %record.id, "dropping spa booking without a time of day");
        return None;
    };
    let client = non_empty(record.client_name.as_ref()).unwrap_or("Guest");
    let duo = if record.duo { " (duo)" } else { "" };
    Some(CanonicalEvent {
        key: EventKey::new(Domain::Spa, record.id.clone()),
        start: at_clock(date, clock),
        end: None,
        display_time: clock.to_string(),
        title: format!("Spa: {client}{duo}"),
        style: StyleToken::Rose,
        original: SourceRecord::Spa(record.clone()),
    })
}

/// Adapt a CRM lead into a reminder-to-call entry placed at the request
/// instant.
pub fn adapt_lead(record: &CrmLead) -> Option<CanonicalEvent> {
    let Some(start) = normalize(record.requested_at.as_ref()) else {
        debug!(id = %record.id, "dropping lead with unparseable request date");
        return None;
    };
    let who = non_empty(record.name.as_ref())
        .or(non_empty(record.phone.as_ref()))
        .unwrap_or("lead");
    Some(CanonicalEvent {
        key: EventKey::new(Domain::CrmLead, record.id.clone()),
        start,
        end: None,
        display_time: ClockTime::of(&start).to_string(),
        title: format!("Follow up: {who}"),
        style: StyleToken::Amber,
        original: SourceRecord::Lead(record.clone()),
    })
}

/// Adapt an action task. A well-formed `due_time` overrides the due date's
/// clock time; otherwise the task renders as all-day while the underlying
/// timestamp keeps midnight.
pub fn adapt_task(record: &ActionTask) -> Option<CanonicalEvent> {
    let Some(due) = normalize(record.due_date.as_ref()) else {
        debug!(id = %record.id, "dropping task with unparseable due date");
        return None;
    };
    let (start, display_time) = match non_empty(record.due_time.as_ref()).and_then(ClockTime::parse)
    {
        Some(clock) => (at_clock(due, clock), clock.to_string()),
        None => (due, ALL_DAY_LABEL.to_string()),
    };
    Some(CanonicalEvent {
        key: EventKey::new(Domain::Task, record.id.clone()),
        start,
        end: None,
        display_time,
        title: non_empty(record.label.as_ref()).unwrap_or("Task").to_string(),
        style: StyleToken::Violet,
        original: SourceRecord::Task(record.clone()),
    })
}

/// Adapt a multi-day group stay. Both ends of the span are required.
pub fn adapt_stay(record: &GroupStay) -> Option<CanonicalEvent> {
    let Some(start) = normalize(record.arrival.as_ref()) else {
        debug!(id = %record.id, "dropping group stay without arrival");
        return None;
    };
    let Some(end) = normalize(record.departure.as_ref()) else {
        debug!(id = %record.id, "dropping group stay without departure");
        return None;
    };
    let name = non_empty(record.group_name.as_ref()).unwrap_or("Group");
    let style = match record.status {
        StayStatus::Confirmed => StyleToken::Emerald,
        StayStatus::Option => StyleToken::Slate,
    };
    Some(CanonicalEvent {
        key: EventKey::new(Domain::GroupStay, record.id.clone()),
        start,
        end: Some(end),
        display_time: ALL_DAY_LABEL.to_string(),
        title: format!("{name} ({})", record.status.display_name()),
        style,
        original: SourceRecord::Stay(record.clone()),
    })
}
