//! Aggregation of the five domain collections into one canonical timeline.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::records::RecordSet;

use super::adapt;
use super::identity::Domain;
use super::types::CanonicalEvent;

// ============================================================================
// Domain Toggles
// ============================================================================

/// Per-domain inclusion switches. Everything is shown by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DomainToggles {
    pub agenda: bool,
    pub spa: bool,
    pub leads: bool,
    pub tasks: bool,
    pub stays: bool,
}

impl Default for DomainToggles {
    fn default() -> Self {
        Self {
            agenda: true,
            spa: true,
            leads: true,
            tasks: true,
            stays: true,
        }
    }
}

impl DomainToggles {
    /// Whether a domain is enabled.
    pub fn enabled(&self, domain: Domain) -> bool {
        match domain {
            Domain::Agenda => self.agenda,
            Domain::Spa => self.spa,
            Domain::CrmLead => self.leads,
            Domain::Task => self.tasks,
            Domain::GroupStay => self.stays,
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Run the enabled adapters over their collections and concatenate the
/// results in fixed domain order, deduplicating by flat key (keep-first).
///
/// Duplicate keys should not occur by construction; the dedup pass defends
/// against a store handing the same record to two collections.
pub fn aggregate(toggles: &DomainToggles, records: &RecordSet) -> Vec<CanonicalEvent> {
    let mut events = Vec::new();
    for domain in Domain::ALL {
        if !toggles.enabled(domain) {
            continue;
        }
        match domain {
            Domain::Agenda => events.extend(records.agenda.iter().filter_map(adapt::adapt_agenda)),
            Domain::Spa => events.extend(records.spa.iter().filter_map(adapt::adapt_spa)),
            Domain::CrmLead => events.extend(records.leads.iter().filter_map(adapt::adapt_lead)),
            Domain::Task => events.extend(records.tasks.iter().filter_map(adapt::adapt_task)),
            Domain::GroupStay => events.extend(records.stays.iter().filter_map(adapt::adapt_stay)),
        }
    }

    let mut seen = HashSet::with_capacity(events.len());
    events.retain(|event| {
        let fresh = seen.insert(event.id());
        if !fresh {
            debug!(id = %event.id(), "dropping duplicate canonical id");
        }
        fresh
    });
    events
}

// ============================================================================
// Timeline Statistics
// ============================================================================

/// Summary figures over one aggregation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TimelineStats {
    /// Total canonical events.
    pub total: usize,
    /// Events per domain, in aggregation order.
    pub by_domain: Vec<DomainCount>,
    /// Multi-day events (group stays).
    pub multi_day: usize,
    /// Earliest start in the timeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest: Option<DateTime<Utc>>,
    /// Latest start (or span end) in the timeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<DateTime<Utc>>,
}

/// Per-domain event count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DomainCount {
    pub domain: Domain,
    pub count: usize,
}

impl TimelineStats {
    /// Compute statistics over a canonical event set.
    pub fn compute(events: &[CanonicalEvent]) -> Self {
        let by_domain = Domain::ALL
            .iter()
            .map(|&domain| DomainCount {
                domain,
                count: events.iter().filter(|e| e.domain() == domain).count(),
            })
            .collect();
        let earliest = events.iter().map(|e| e.start).min();
        let latest = events.iter().map(|e| e.end.unwrap_or(e.start)).max();
        Self {
            total: events.len(),
            by_domain,
            multi_day: events.iter().filter(|e| e.is_multi_day()).count(),
            earliest,
            latest,
        }
    }
}
