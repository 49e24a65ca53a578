//! Typed mirrors of the five external record collections.
//!
//! These are the shapes the authoritative store hands the dashboard. They
//! are deliberately tolerant: every date field is an optional [`RawDate`],
//! text fields are optional, and legacy field names are accepted as serde
//! aliases. Validation happens in the adapters, not here; a record that
//! deserializes is not necessarily schedulable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timeline::RawDate;

// ============================================================================
// Agenda
// ============================================================================

/// A personal agenda entry (meetings, walk-throughs, supplier visits).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AgendaEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Start instant of the entry.
    #[serde(alias = "start", skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<RawDate>,
    /// End instant; used to preserve duration when rescheduling.
    #[serde(alias = "end", skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<RawDate>,
    /// The entry's own display-time label, e.g. `"14:00"`.
    #[serde(alias = "time", skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
}

// ============================================================================
// Spa
// ============================================================================

/// A spa treatment booking. Date and time-of-day are stored separately,
/// unlike every other collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SpaBooking {
    pub id: String,
    #[serde(alias = "client", skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Treatment date, without a time component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<RawDate>,
    /// Treatment time-of-day label, e.g. `"15:30"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Whether this is a duo (two-person) treatment.
    pub duo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
}

// ============================================================================
// CRM Lead
// ============================================================================

/// A CRM follow-up lead. The date on a lead is when the request came in,
/// not an appointment; the calendar shows it as a reminder to call back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CrmLead {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// When the lead's request was received.
    #[serde(
        alias = "request_date",
        alias = "created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_at: Option<RawDate>,
}

// ============================================================================
// Task
// ============================================================================

/// A back-office action task with a due date and an optional time of day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ActionTask {
    pub id: String,
    #[serde(alias = "description", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(alias = "due", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<RawDate>,
    /// Optional `"H:MM"` / `"HH:MM"` time of day; overrides the due date's
    /// clock time when well-formed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    pub done: bool,
}

// ============================================================================
// Group Stay
// ============================================================================

/// Commercial status of a group stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StayStatus {
    #[default]
    Confirmed,
    Option,
}

impl StayStatus {
    /// Human-readable name, embedded in group-stay titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Option => "Option",
        }
    }
}

/// A multi-day group stay (tour groups, seminars, wedding blocks).
///
/// Older records used `check_in`/`check_out` or `start_date`/`end_date`
/// for the span; the aliases keep them readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GroupStay {
    pub id: String,
    #[serde(alias = "label", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub status: StayStatus,
    #[serde(
        alias = "check_in",
        alias = "start_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub arrival: Option<RawDate>,
    #[serde(
        alias = "check_out",
        alias = "end_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub departure: Option<RawDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
}

// ============================================================================
// Record Set
// ============================================================================

/// The five collections the engine consumes, bundled. Missing collections
/// deserialize as empty; order within a collection is not significant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RecordSet {
    pub agenda: Vec<AgendaEntry>,
    pub spa: Vec<SpaBooking>,
    pub leads: Vec<CrmLead>,
    pub tasks: Vec<ActionTask>,
    pub stays: Vec<GroupStay>,
}
