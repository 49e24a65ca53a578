//! Aggregation pipeline tests over realistic mixed-shape collections.

use concierge::{aggregate, Domain, DomainToggles, EventKey, RecordSet, TimelineStats};

/// A record set the way the store actually hands it over: every date shape
/// in play, some records malformed.
fn hotel_week() -> RecordSet {
    serde_json::from_str(
        r#"{
            "agenda": [
                {"id": "a1", "title": "Owners briefing", "start": "2024-06-10T09:00:00", "end": "2024-06-10T10:30:00", "time": "09:00"},
                {"id": "a2", "title": "Broken clock", "start": "sometime"}
            ],
            "spa": [
                {"id": "s1", "client": "Dupont", "date": "2024-06-10", "time": "15:30", "duo": true},
                {"id": "s2", "client": "Rossi", "date": "2024-06-11", "time": ""}
            ],
            "leads": [
                {"id": "l1", "name": "Mme Garnier", "request_date": {"seconds": 1718010000}},
                {"id": "l2", "name": "No date yet"}
            ],
            "tasks": [
                {"id": "t1", "label": "Order linen", "due": "2024-06-12", "due_time": "14:30"},
                {"id": "t2", "label": "Check boiler", "due": 1718150400000}
            ],
            "stays": [
                {"id": "g1", "label": "Choir tour", "status": "option", "check_in": "2024-06-10", "check_out": "2024-06-12"},
                {"id": "g2", "label": "No departure", "check_in": "2024-06-14"}
            ]
        }"#,
    )
    .expect("valid record set")
}

#[test]
fn test_malformed_records_never_block_the_rest() {
    let events = aggregate(&DomainToggles::default(), &hotel_week());
    let ids: Vec<String> = events.iter().map(|e| e.id()).collect();
    // a2 (unparseable start), s2 (empty time), l2 (no date) and
    // g2 (no departure) are silently gone; everything else is present.
    assert_eq!(
        ids,
        ["agenda-a1", "spa-s1", "lead-l1", "task-t1", "task-t2", "group-g1"]
    );
}

#[test]
fn test_every_id_round_trips_through_the_identity_scheme() {
    let events = aggregate(&DomainToggles::default(), &hotel_week());
    for event in &events {
        let key = EventKey::parse(&event.id()).expect("parseable id");
        assert_eq!(key, event.key);
        // Prefixing is idempotent through a rebuild
        assert_eq!(EventKey::new(key.domain, event.id()).flat(), event.id());
    }
}

#[test]
fn test_toggles_are_independent() {
    let records = hotel_week();
    let only_ops = DomainToggles {
        leads: false,
        spa: false,
        ..Default::default()
    };
    let events = aggregate(&only_ops, &records);
    assert!(events
        .iter()
        .all(|e| e.domain() != Domain::Spa && e.domain() != Domain::CrmLead));
    assert_eq!(events.len(), 4);
}

#[test]
fn test_stats_over_the_week() {
    let events = aggregate(&DomainToggles::default(), &hotel_week());
    let stats = TimelineStats::compute(&events);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.multi_day, 1);
    assert_eq!(
        stats.earliest.unwrap().date_naive().to_string(),
        "2024-06-10"
    );
    assert_eq!(stats.latest.unwrap().date_naive().to_string(), "2024-06-12");
}
