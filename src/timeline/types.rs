//! The canonical, domain-agnostic event model.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::records::{ActionTask, AgendaEntry, CrmLead, GroupStay, SpaBooking};

use super::identity::{Domain, EventKey};

// ============================================================================
// Style Token
// ============================================================================

/// Opaque rendering hint (a color family). Scheduling logic never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    Sky,
    Rose,
    Amber,
    Violet,
    Emerald,
    Slate,
}

impl StyleToken {
    /// The stable string form used as a CSS-class-ish key by renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sky => "sky",
            Self::Rose => "rose",
            Self::Amber => "amber",
            Self::Violet => "violet",
            Self::Emerald => "emerald",
            Self::Slate => "slate",
        }
    }
}

// ============================================================================
// Source Record Back-Reference
// ============================================================================

/// A back-reference to the originating domain record.
///
/// This is a copy, not ownership: the canonical event never mutates the
/// source, and the authoritative store keeps owning the record. Used by
/// click-through navigation and nothing in scheduling math.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceRecord {
    Agenda(AgendaEntry),
    Spa(SpaBooking),
    Lead(CrmLead),
    Task(ActionTask),
    Stay(GroupStay),
}

// ============================================================================
// Canonical Event
// ============================================================================

/// The normalized representation of any schedulable record.
///
/// Produced only by the domain adapters; recomputed from scratch on every
/// aggregation pass and never stored. `start` is always a valid instant:
/// records whose primary date fails normalization are dropped before an
/// event exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanonicalEvent {
    /// First-class identity; render [`CanonicalEvent::id`] where a flat
    /// key is needed.
    pub key: EventKey,
    /// Canonical start instant.
    pub start: DateTime<Utc>,
    /// End instant; present only for group stays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Rendering-only time label: `"HH:MM"` or a domain label such as
    /// `"All Day"`. Authoritative for vertical placement in Day/Week view,
    /// not for Month-view scheduling math.
    pub display_time: String,
    pub title: String,
    pub style: StyleToken,
    /// Back-reference to the originating record.
    pub original: SourceRecord,
}

impl CanonicalEvent {
    /// The flat prefixed id used as a display key and drag payload.
    pub fn id(&self) -> String {
        self.key.flat()
    }

    /// The domain this event came from.
    pub fn domain(&self) -> Domain {
        self.key.domain
    }

    /// Whether this event spans more than a single point in time.
    pub fn is_multi_day(&self) -> bool {
        self.end.is_some()
    }
}
