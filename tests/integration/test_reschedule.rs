//! Gesture-to-update tests: the full drag pipeline against the router.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use concierge::{
    CalendarEngine, Config, GridCell, PointerEvent, RecordSet, SlotSink, TouchEvent, UpdateSinks,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
}

fn records() -> RecordSet {
    serde_json::from_str(
        r#"{
            "agenda": [
                {"id": "a1", "title": "Owners briefing", "start": "2024-06-10T10:00:00", "end": "2024-06-10T11:30:00"}
            ],
            "tasks": [
                {"id": "t1", "label": "Order linen", "due": "2024-06-10"}
            ]
        }"#,
    )
    .expect("valid record set")
}

fn slot_recorder(log: &Rc<RefCell<Vec<String>>>) -> SlotSink {
    let log = Rc::clone(log);
    Box::new(move |id, date, time| {
        log.borrow_mut().push(format!("{id} {date} {time}"));
    })
}

#[test]
fn test_pointer_drag_reschedules_task() {
    let mut engine = CalendarEngine::new(Config::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sinks = UpdateSinks {
        task: Some(slot_recorder(&log)),
        ..Default::default()
    };

    let session = engine.session_mut();
    session.apply_pointer(PointerEvent::DragStart {
        event_id: "task-t1".to_string(),
    });
    let outcome = session.apply_pointer(PointerEvent::DropOn {
        cell: GridCell::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 9),
    });
    let intent = outcome.intent.expect("drop completes the gesture");

    engine.apply_move(&intent, &records(), &mut sinks);
    drop(sinks);
    assert_eq!(log.borrow().as_slice(), ["t1 2024-07-01 09:00"]);
}

#[test]
fn test_touch_drag_preserves_agenda_duration() {
    let mut engine = CalendarEngine::new(Config::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sinks = UpdateSinks {
        agenda: Some({
            let log = Rc::clone(&log);
            Box::new(move |id, start, end| {
                log.borrow_mut()
                    .push(format!("{id} {} {}", start.to_rfc3339(), end.to_rfc3339()));
            })
        }),
        ..Default::default()
    };

    let session = engine.session_mut();
    session.apply_touch(TouchEvent::Start {
        event_id: "agenda-a1".to_string(),
        at: t0(),
    });
    session.apply_touch(TouchEvent::Move {
        at: t0() + Duration::milliseconds(400),
    });
    let outcome = session.apply_touch(TouchEvent::End {
        at: t0() + Duration::milliseconds(900),
        cell: Some(GridCell::new(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(), 14)),
    });
    let intent = outcome.intent.expect("long press completes the gesture");

    engine.apply_move(&intent, &records(), &mut sinks);
    drop(sinks);
    // Originally 10:00 to 11:30: the 90 minutes survive the move.
    assert_eq!(
        log.borrow().as_slice(),
        ["a1 2024-07-02T14:00:00+00:00 2024-07-02T15:30:00+00:00"]
    );
}

#[test]
fn test_quick_tap_never_moves_anything() {
    let mut engine = CalendarEngine::new(Config::default());
    let session = engine.session_mut();

    session.apply_touch(TouchEvent::Start {
        event_id: "task-t1".to_string(),
        at: t0(),
    });
    // Released 120 ms in, well under the 300 ms default threshold.
    let outcome = session.apply_touch(TouchEvent::End {
        at: t0() + Duration::milliseconds(120),
        cell: Some(GridCell::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 9)),
    });
    assert!(outcome.intent.is_none());
}

#[test]
fn test_configured_hold_threshold() {
    let config = Config::from_toml("[drag]\nhold_threshold_ms = 600").unwrap();
    let mut engine = CalendarEngine::new(config);
    let session = engine.session_mut();

    session.apply_touch(TouchEvent::Start {
        event_id: "task-t1".to_string(),
        at: t0(),
    });
    // 400 ms would satisfy the default threshold but not this one.
    let outcome = session.apply_touch(TouchEvent::End {
        at: t0() + Duration::milliseconds(400),
        cell: Some(GridCell::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 9)),
    });
    assert!(outcome.intent.is_none());
}

#[test]
fn test_unresolvable_intent_is_silent() {
    let engine = CalendarEngine::new(Config::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sinks = UpdateSinks {
        task: Some(slot_recorder(&log)),
        agenda: None,
        spa: None,
        lead: None,
        stay: None,
    };
    let intent = concierge::MoveIntent {
        event_id: "ghost-99".to_string(),
        target_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        target_hour: 9,
    };
    engine.apply_move(&intent, &records(), &mut sinks);
    drop(sinks);
    assert!(log.borrow().is_empty());
}
