//! Contact identity lookups shared by the lead and spa record shapes.
//!
//! The calendar itself never needs a contact's identity; this exists for
//! side actions (click-to-call, guest lookup) that start from a record id
//! surfaced by the calendar.

use crate::records::RecordSet;

/// Resolve a display identity for a contact reference.
///
/// The reference is a raw record id from either the lead or the spa
/// collection; leads are checked first because they are the primary
/// contact-bearing shape.
pub fn contact_display_name(records: &RecordSet, reference: &str) -> Option<String> {
    if let Some(lead) = records.leads.iter().find(|l| l.id == reference) {
        return lead
            .name
            .clone()
            .or_else(|| lead.phone.clone())
            .filter(|s| !s.trim().is_empty());
    }
    records
        .spa
        .iter()
        .find(|b| b.id == reference)
        .and_then(|b| b.client_name.clone())
        .filter(|s| !s.trim().is_empty())
}
