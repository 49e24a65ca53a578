//! The mutation router: one move intent in, one domain update out.
//!
//! Each domain exposes a different update contract, so the router's whole
//! job is resolving which domain an event id belongs to and formatting the
//! arguments that domain expects. Resolution is prefix-first via the
//! identity scheme; the structural fallback below exists for ids that lost
//! their prefix and mirrors the legacy sniffing order. Every failure path
//! is a logged no-op: a stray drop must never take the dashboard down.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::drag::MoveIntent;
use crate::records::RecordSet;
use crate::timeline::{normalize, Domain, EventKey};

// ============================================================================
// Update Sinks
// ============================================================================

/// Update callback taking `(raw_id, "YYYY-MM-DD", "HH:00")`.
pub type SlotSink = Box<dyn FnMut(&str, &str, &str)>;

/// Update callback taking `(raw_id, new_start, new_end)`; the agenda shape,
/// which preserves the original event's duration.
pub type SpanSink = Box<dyn FnMut(&str, DateTime<Utc>, DateTime<Utc>)>;

/// Update callback taking `(raw_id, combined_instant)`; the CRM-lead shape.
pub type InstantSink = Box<dyn FnMut(&str, DateTime<Utc>)>;

/// The per-domain update callbacks supplied by the caller. All optional; a
/// missing sink skips that domain's moves without affecting the others.
///
/// The argument shapes are intentionally asymmetric: they match what each
/// external update endpoint actually takes and must not be unified.
#[derive(Default)]
pub struct UpdateSinks {
    pub agenda: Option<SpanSink>,
    pub spa: Option<SlotSink>,
    pub lead: Option<InstantSink>,
    pub task: Option<SlotSink>,
    pub stay: Option<SlotSink>,
}

// ============================================================================
// Routing
// ============================================================================

/// Resolve a move intent to its domain and invoke that domain's update
/// callback. Unresolvable ids and missing sinks are silent no-ops.
pub fn route(intent: &MoveIntent, records: &RecordSet, sinks: &mut UpdateSinks) {
    match EventKey::parse(&intent.event_id) {
        Some(key) => dispatch(key.domain, &key.raw_id, intent, records, sinks),
        None => match sniff_domain(&intent.event_id, records) {
            Some(domain) => dispatch(domain, &intent.event_id, intent, records, sinks),
            None => {
                debug!(id = %intent.event_id, "move intent matches no record; ignoring");
            }
        },
    }
}

/// Legacy structural fallback for ids without a known prefix: find the
/// record by verbatim id and let the collection it lives in stand in for
/// the shape sniffing (due-date shape, then client-name shape, then
/// agenda). Leads and group stays are deliberately not reachable this way.
fn sniff_domain(raw_id: &str, records: &RecordSet) -> Option<Domain> {
    if records.tasks.iter().any(|t| t.id == raw_id) {
        Some(Domain::Task)
    } else if records.spa.iter().any(|s| s.id == raw_id) {
        Some(Domain::Spa)
    } else if records.agenda.iter().any(|a| a.id == raw_id) {
        Some(Domain::Agenda)
    } else {
        None
    }
}

fn dispatch(
    domain: Domain,
    raw_id: &str,
    intent: &MoveIntent,
    records: &RecordSet,
    sinks: &mut UpdateSinks,
) {
    let date_str = intent.target_date.format("%Y-%m-%d").to_string();
    let time_str = format!("{:02}:00", intent.target_hour);
    match domain {
        Domain::Spa => invoke_slot(sinks.spa.as_mut(), domain, raw_id, &date_str, &time_str),
        Domain::Task => invoke_slot(sinks.task.as_mut(), domain, raw_id, &date_str, &time_str),
        Domain::GroupStay => invoke_slot(sinks.stay.as_mut(), domain, raw_id, &date_str, &time_str),
        Domain::CrmLead => match sinks.lead.as_mut() {
            Some(sink) => sink(raw_id, slot_instant(intent.target_date, intent.target_hour)),
            None => debug!(domain = domain.tag(), "no update sink; skipping move"),
        },
        Domain::Agenda => reschedule_agenda(raw_id, intent, records, sinks),
    }
}

fn invoke_slot(sink: Option<&mut SlotSink>, domain: Domain, raw_id: &str, date: &str, time: &str) {
    match sink {
        Some(sink) => sink(raw_id, date, time),
        None => debug!(domain = domain.tag(), "no update sink; skipping move"),
    }
}

/// Agenda entries keep their duration across a reschedule: the new end is
/// the new start plus the original span (one hour when the original span
/// cannot be computed).
fn reschedule_agenda(raw_id: &str, intent: &MoveIntent, records: &RecordSet, sinks: &mut UpdateSinks) {
    let Some(sink) = sinks.agenda.as_mut() else {
        debug!(domain = "agenda", "no update sink; skipping move");
        return;
    };
    let Some(record) = records.agenda.iter().find(|a| a.id == raw_id) else {
        debug!(id = raw_id, "agenda record not found; ignoring move");
        return;
    };
    let duration = match (
        normalize(record.starts_at.as_ref()),
        normalize(record.ends_at.as_ref()),
    ) {
        (Some(start), Some(end)) => end - start,
        _ => Duration::hours(1),
    };
    let new_start = slot_instant(intent.target_date, intent.target_hour);
    sink(raw_id, new_start, new_start + duration);
}

/// The instant of a grid slot: the target date at the target hour, minutes
/// zeroed.
fn slot_instant(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ActionTask, AgendaEntry, SpaBooking};
    use crate::timeline::RawDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn intent(event_id: &str, day: u32, hour: u32) -> MoveIntent {
        MoveIntent {
            event_id: event_id.to_string(),
            target_date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
            target_hour: hour,
        }
    }

    fn slot_recorder(log: &Rc<RefCell<Vec<String>>>) -> SlotSink {
        let log = Rc::clone(log);
        Box::new(move |id, date, time| {
            log.borrow_mut().push(format!("{id} {date} {time}"));
        })
    }

    #[test]
    fn test_task_reschedule() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            task: Some(slot_recorder(&log)),
            ..Default::default()
        };
        route(&intent("task-t1", 1, 9), &RecordSet::default(), &mut sinks);
        assert_eq!(log.borrow().as_slice(), ["t1 2024-07-01 09:00"]);
    }

    #[test]
    fn test_lead_gets_combined_instant() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            lead: Some({
                let log = Rc::clone(&log);
                Box::new(move |id, at| {
                    log.borrow_mut().push(format!("{id} {}", at.to_rfc3339()));
                })
            }),
            ..Default::default()
        };
        route(&intent("lead-l7", 2, 14), &RecordSet::default(), &mut sinks);
        assert_eq!(log.borrow().as_slice(), ["l7 2024-07-02T14:00:00+00:00"]);
    }

    #[test]
    fn test_agenda_preserves_duration() {
        let records = RecordSet {
            agenda: vec![AgendaEntry {
                id: "a1".to_string(),
                starts_at: Some(RawDate::Text("2024-06-10T10:00:00".to_string())),
                ends_at: Some(RawDate::Text("2024-06-10T11:30:00".to_string())),
                ..Default::default()
            }],
            ..Default::default()
        };
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            agenda: Some({
                let log = Rc::clone(&log);
                Box::new(move |id, start, end| {
                    log.borrow_mut().push(format!(
                        "{id} {} {}",
                        start.to_rfc3339(),
                        end.to_rfc3339()
                    ));
                })
            }),
            ..Default::default()
        };
        route(&intent("agenda-a1", 2, 14), &records, &mut sinks);
        assert_eq!(
            log.borrow().as_slice(),
            ["a1 2024-07-02T14:00:00+00:00 2024-07-02T15:30:00+00:00"]
        );
    }

    #[test]
    fn test_agenda_default_duration_one_hour() {
        let records = RecordSet {
            agenda: vec![AgendaEntry {
                id: "a1".to_string(),
                starts_at: Some(RawDate::Text("2024-06-10T10:00:00".to_string())),
                ends_at: None,
                ..Default::default()
            }],
            ..Default::default()
        };
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            agenda: Some({
                let log = Rc::clone(&log);
                Box::new(move |_, start, end| {
                    log.borrow_mut().push((end - start).num_minutes().to_string());
                })
            }),
            ..Default::default()
        };
        route(&intent("agenda-a1", 2, 14), &records, &mut sinks);
        assert_eq!(log.borrow().as_slice(), ["60"]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            task: Some(slot_recorder(&log)),
            agenda: None,
            ..Default::default()
        };
        route(
            &intent("mystery-42", 1, 9),
            &RecordSet::default(),
            &mut sinks,
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_missing_sink_is_noop() {
        // No task sink supplied; must not panic.
        let mut sinks = UpdateSinks::default();
        route(&intent("task-t1", 1, 9), &RecordSet::default(), &mut sinks);
    }

    #[test]
    fn test_fallback_sniffs_task_before_spa() {
        let records = RecordSet {
            tasks: vec![ActionTask {
                id: "shared".to_string(),
                ..Default::default()
            }],
            spa: vec![SpaBooking {
                id: "shared".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            task: Some(slot_recorder(&log)),
            spa: Some(slot_recorder(&log)),
            ..Default::default()
        };
        route(&intent("shared", 3, 8), &records, &mut sinks);
        assert_eq!(log.borrow().as_slice(), ["shared 2024-07-03 08:00"]);
    }

    #[test]
    fn test_fallback_reaches_agenda_with_duration() {
        let records = RecordSet {
            agenda: vec![AgendaEntry {
                id: "bare".to_string(),
                starts_at: Some(RawDate::Millis(1_718_013_600_000)),
                ends_at: Some(RawDate::Millis(1_718_017_200_000)),
                ..Default::default()
            }],
            ..Default::default()
        };
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            agenda: Some({
                let log = Rc::clone(&log);
                Box::new(move |id, start, end| {
                    log.borrow_mut()
                        .push(format!("{id} {}", (end - start).num_minutes()));
                })
            }),
            ..Default::default()
        };
        route(&intent("bare", 4, 16), &records, &mut sinks);
        assert_eq!(log.borrow().as_slice(), ["bare 60"]);
    }

    #[test]
    fn test_minutes_always_zeroed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sinks = UpdateSinks {
            spa: Some(slot_recorder(&log)),
            ..Default::default()
        };
        route(&intent("spa-s9", 15, 7), &RecordSet::default(), &mut sinks);
        assert_eq!(log.borrow().as_slice(), ["s9 2024-07-15 07:00"]);
    }
}
