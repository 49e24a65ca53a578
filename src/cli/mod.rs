//! Command handlers for the concierge CLI.
//!
//! The CLI is an inspection harness over the engine: it loads the five
//! record collections from a JSON file, runs the requested operation, and
//! prints the result as text or JSON. Moves are dry-run: the update each
//! domain endpoint would receive is printed instead of sent.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use serde_json::json;

use concierge::{
    CalendarEngine, Config, DomainToggles, Granularity, MoveIntent, RecordError, RecordSet,
    SlotSink, UpdateSinks, ViewOptions,
};

/// Load a record set from a JSON file.
pub fn load_records(path: &str) -> anyhow::Result<RecordSet> {
    let content = std::fs::read_to_string(path).map_err(RecordError::ReadFile)?;
    let records: RecordSet = serde_json::from_str(&content).map_err(RecordError::Parse)?;
    Ok(records)
}

/// Parse a `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_date(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date: {text}")),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Parse a granularity argument.
pub fn parse_granularity(text: &str) -> anyhow::Result<Granularity> {
    match text {
        "day" => Ok(Granularity::Day),
        "week" => Ok(Granularity::Week),
        "month" => Ok(Granularity::Month),
        other => anyhow::bail!("invalid granularity: {other} (expected day, week or month)"),
    }
}

/// Project a view and print it.
pub fn run_view(
    config: Config,
    records_path: &str,
    granularity: Granularity,
    reference: NaiveDate,
    toggles: DomainToggles,
    json: bool,
) -> anyhow::Result<()> {
    let engine = CalendarEngine::new(config);
    let records = load_records(records_path)?;
    let options = ViewOptions {
        granularity,
        reference,
        window: engine.window(),
    };
    let view = engine.view(&toggles, &records, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!(
        "{} view around {}",
        view.granularity.display_name(),
        view.reference
    );
    for cell in &view.cells {
        if cell.events.is_empty() {
            continue;
        }
        println!("{}", cell.date.format("%a %Y-%m-%d"));
        for placed in &cell.events {
            let offset = placed
                .offset_minutes
                .map(|m| format!(" (+{m}m)"))
                .unwrap_or_default();
            println!(
                "  [{}] {} {}{offset}",
                placed.event.domain().tag(),
                placed.event.display_time,
                placed.event.title
            );
        }
    }
    Ok(())
}

/// Dry-run a reschedule: print the update each domain endpoint would
/// receive for this move intent.
pub fn run_move(
    config: Config,
    records_path: &str,
    event_id: &str,
    target_date: NaiveDate,
    target_hour: u32,
    json: bool,
) -> anyhow::Result<()> {
    let engine = CalendarEngine::new(config);
    let records = load_records(records_path)?;
    let intent = MoveIntent {
        event_id: event_id.to_string(),
        target_date,
        target_hour,
    };

    let updates: Rc<RefCell<Vec<serde_json::Value>>> = Rc::new(RefCell::new(Vec::new()));
    let mut sinks = dry_run_sinks(&updates);
    engine.apply_move(&intent, &records, &mut sinks);
    drop(sinks);

    let updates = updates.borrow();
    if json {
        println!("{}", serde_json::to_string_pretty(&*updates)?);
        return Ok(());
    }
    if updates.is_empty() {
        println!("no update (id not resolvable)");
        return Ok(());
    }
    for update in updates.iter() {
        println!("{update}");
    }
    Ok(())
}

/// Print timeline statistics.
pub fn run_stats(
    config: Config,
    records_path: &str,
    toggles: DomainToggles,
    json: bool,
) -> anyhow::Result<()> {
    let engine = CalendarEngine::new(config);
    let records = load_records(records_path)?;
    let stats = engine.stats(&toggles, &records);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    println!("{} events ({} multi-day)", stats.total, stats.multi_day);
    for entry in &stats.by_domain {
        println!("  {:<10} {}", entry.domain.display_name(), entry.count);
    }
    if let (Some(earliest), Some(latest)) = (stats.earliest, stats.latest) {
        println!("  span       {} .. {}", earliest.date_naive(), latest.date_naive());
    }
    Ok(())
}

fn slot_sink(domain: &'static str, log: Rc<RefCell<Vec<serde_json::Value>>>) -> SlotSink {
    Box::new(move |id, date, time| {
        log.borrow_mut()
            .push(json!({"domain": domain, "id": id, "date": date, "time": time}));
    })
}

/// Sinks that record the would-be updates instead of sending them.
fn dry_run_sinks(updates: &Rc<RefCell<Vec<serde_json::Value>>>) -> UpdateSinks {
    UpdateSinks {
        agenda: Some({
            let log = Rc::clone(updates);
            Box::new(move |id, start, end| {
                log.borrow_mut().push(json!({
                    "domain": "agenda",
                    "id": id,
                    "start": start.to_rfc3339(),
                    "end": end.to_rfc3339(),
                }));
            })
        }),
        spa: Some(slot_sink("spa", Rc::clone(updates))),
        lead: Some({
            let log = Rc::clone(updates);
            Box::new(move |id, at| {
                log.borrow_mut()
                    .push(json!({"domain": "lead", "id": id, "at": at.to_rfc3339()}));
            })
        }),
        task: Some(slot_sink("task", Rc::clone(updates))),
        stay: Some(slot_sink("group", Rc::clone(updates))),
    }
}
