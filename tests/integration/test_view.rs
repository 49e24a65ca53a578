//! View projection tests: month span logic and time-grid placement.

use chrono::NaiveDate;
use concierge::{
    aggregate, Config, DomainToggles, Granularity, HourWindow, RecordSet, ViewOptions,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn june_records() -> RecordSet {
    serde_json::from_str(
        r#"{
            "tasks": [
                {"id": "t1", "label": "Order linen", "due": "2024-06-10", "due_time": "14:30"},
                {"id": "t2", "label": "Inventory", "due": "2024-06-10"}
            ],
            "stays": [
                {"id": "g1", "label": "Choir tour", "check_in": "2024-06-10", "check_out": "2024-06-12"}
            ]
        }"#,
    )
    .expect("valid record set")
}

#[test]
fn test_group_stay_spans_exactly_its_days_in_month_view() {
    let events = aggregate(&DomainToggles::default(), &june_records());
    let view = concierge::project(&events, &ViewOptions::month(ymd(2024, 6, 1)));

    for day in 1..=30 {
        let cell = view.cell(ymd(2024, 6, day)).unwrap();
        let has_stay = cell.events.iter().any(|p| p.event.id() == "group-g1");
        assert_eq!(has_stay, (10..=12).contains(&day), "June {day}");
    }
}

#[test]
fn test_task_time_override_places_at_half_past_two() {
    let events = aggregate(&DomainToggles::default(), &june_records());
    let view = concierge::project(&events, &ViewOptions::week(ymd(2024, 6, 10)));
    let cell = view.cell(ymd(2024, 6, 10)).unwrap();

    let timed = cell
        .events
        .iter()
        .find(|p| p.event.id() == "task-t1")
        .expect("timed task is in the week grid");
    // 14:30 against the default 07:00 window start
    assert_eq!(timed.offset_minutes, Some((14 - 7) * 60 + 30));

    // The untimed task sits at midnight, before the window: not in this view.
    assert!(!cell.events.iter().any(|p| p.event.id() == "task-t2"));
    // The multi-day stay has no usable clock time either.
    assert!(!cell.events.iter().any(|p| p.event.id() == "group-g1"));
}

#[test]
fn test_all_day_task_still_renders_in_month_view() {
    let events = aggregate(&DomainToggles::default(), &june_records());
    let view = concierge::project(&events, &ViewOptions::month(ymd(2024, 6, 10)));
    let cell = view.cell(ymd(2024, 6, 10)).unwrap();
    let untimed = cell
        .events
        .iter()
        .find(|p| p.event.id() == "task-t2")
        .expect("all-day task is in the month cell");
    assert_eq!(untimed.event.display_time, "All Day");
    assert!(untimed.offset_minutes.is_none());
}

#[test]
fn test_configured_window_changes_placement() {
    let config = Config::from_toml("[view]\nstart_hour = 9\nvisible_hours = 10").unwrap();
    let events = aggregate(&DomainToggles::default(), &june_records());
    let options =
        ViewOptions::day(ymd(2024, 6, 10)).with_window(HourWindow::from(&config.view));
    let view = concierge::project(&events, &options);
    assert_eq!(view.granularity, Granularity::Day);

    let timed = view.cells[0]
        .events
        .iter()
        .find(|p| p.event.id() == "task-t1")
        .expect("timed task visible");
    assert_eq!(timed.offset_minutes, Some((14 - 9) * 60 + 30));
    assert_eq!(timed.offset_units(48.0), Some(5.5 * 48.0));
}
