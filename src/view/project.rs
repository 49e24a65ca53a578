//! Projection of the canonical event set into calendar cells.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::timeline::{CanonicalEvent, ClockTime};

use super::types::{DayCell, Granularity, HourWindow, PlacedEvent, ViewOptions, ViewProjection};

/// Placement hour used when neither the display label nor the timestamp
/// yields a usable time of day. A known approximation, not a precision
/// guarantee.
pub const DEFAULT_PLACEMENT_HOUR: u32 = 9;

/// Bucket events into calendar cells for the requested view.
pub fn project(events: &[CanonicalEvent], options: &ViewOptions) -> ViewProjection {
    let cells = cell_dates(options.granularity, options.reference)
        .into_iter()
        .map(|date| {
            let mut placed: Vec<PlacedEvent> = events
                .iter()
                .filter(|event| belongs_to(event, date))
                .filter_map(|event| place(event, options))
                .collect();
            if options.granularity != Granularity::Month {
                placed.sort_by_key(|p| p.offset_minutes);
            }
            DayCell { date, events: placed }
        })
        .collect();
    ViewProjection {
        granularity: options.granularity,
        reference: options.reference,
        cells,
    }
}

/// The cell dates of a view: every day of the month, the Monday-based week
/// around the reference, or the reference day alone.
fn cell_dates(granularity: Granularity, reference: NaiveDate) -> Vec<NaiveDate> {
    match granularity {
        Granularity::Month => {
            let first = reference.with_day(1).unwrap_or(reference);
            first
                .iter_days()
                .take_while(|d| d.month() == reference.month())
                .collect()
        }
        Granularity::Week => {
            let monday =
                reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
            monday.iter_days().take(7).collect()
        }
        Granularity::Day => vec![reference],
    }
}

/// Cell membership. Point events belong to the cell matching their start's
/// calendar day; multi-day spans belong to every cell whose midday falls
/// inside `[day_start(start), day_end(end)]`. The midday probe keeps day
/// boundaries out of the comparison.
fn belongs_to(event: &CanonicalEvent, date: NaiveDate) -> bool {
    match event.end {
        Some(end) => {
            let probe = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
            day_start(&event.start) <= probe && probe <= day_end(&end)
        }
        None => event.start.date_naive() == date,
    }
}

fn day_start(instant: &DateTime<Utc>) -> chrono::NaiveDateTime {
    instant.date_naive().and_time(NaiveTime::MIN)
}

fn day_end(instant: &DateTime<Utc>) -> chrono::NaiveDateTime {
    instant
        .date_naive()
        .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Resolve an event's vertical placement for a time-grid view, or pass it
/// through untouched for Month view. Events whose hour falls before the
/// visible window are outside the view, not an error.
fn place(event: &CanonicalEvent, options: &ViewOptions) -> Option<PlacedEvent> {
    if options.granularity == Granularity::Month {
        return Some(PlacedEvent {
            event: event.clone(),
            offset_minutes: None,
        });
    }
    let clock = placement_time(&event.display_time, Some(&event.start));
    let offset = options.window.offset_minutes(clock)?;
    Some(PlacedEvent {
        event: event.clone(),
        offset_minutes: Some(offset),
    })
}

/// Time-of-day resolution for vertical placement: the `"HH:MM"` display
/// label first, then the canonical timestamp's own clock time, then the
/// documented fallback hour.
pub fn placement_time(display_time: &str, start: Option<&DateTime<Utc>>) -> ClockTime {
    ClockTime::parse(display_time)
        .or_else(|| start.map(ClockTime::of))
        .unwrap_or(ClockTime::new(DEFAULT_PLACEMENT_HOUR, 0))
}

impl HourWindow {
    /// Minutes below the top of the window, or `None` when the time falls
    /// before the window start.
    pub fn offset_minutes(&self, clock: ClockTime) -> Option<u32> {
        if clock.hour < self.start_hour {
            return None;
        }
        Some(clock.minutes_from_midnight() - self.start_hour * 60)
    }
}
