//! Identity scheme for the aggregated event id-space.
//!
//! Every canonical event carries its `(domain, raw id)` pair as first-class
//! data from the moment it is created; the flat `"<tag>-<raw>"` string form
//! exists only at the rendering and gesture boundary where a single key is
//! required. [`EventKey::parse`] recovers the pair from a flat key, and
//! returns `None` for unknown tags so callers can fall back to heuristic
//! resolution.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Domain
// ============================================================================

/// The five source record types feeding the unified calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Agenda,
    Spa,
    CrmLead,
    Task,
    GroupStay,
}

impl Domain {
    /// All domains, in aggregation order. Deduplication is keep-first in
    /// this order.
    pub const ALL: [Self; 5] = [
        Self::Agenda,
        Self::Spa,
        Self::CrmLead,
        Self::Task,
        Self::GroupStay,
    ];

    /// The stable identifier tag for this domain. Safe as both a display
    /// key and a parse token; no tag is a prefix of another.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Agenda => "agenda",
            Self::Spa => "spa",
            Self::CrmLead => "lead",
            Self::Task => "task",
            Self::GroupStay => "group",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Agenda => "Agenda",
            Self::Spa => "Spa",
            Self::CrmLead => "CRM Lead",
            Self::Task => "Task",
            Self::GroupStay => "Group Stay",
        }
    }
}

// ============================================================================
// Event Key
// ============================================================================

/// The identity of a canonical event: its domain plus the originating
/// record's own id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct EventKey {
    pub domain: Domain,
    pub raw_id: String,
}

impl EventKey {
    /// Create a key for a raw record id.
    ///
    /// If the raw id already carries this domain's tag it is stripped, so
    /// prefixing is applied exactly once no matter how often a key is
    /// rebuilt from its own flat form.
    pub fn new(domain: Domain, raw_id: impl Into<String>) -> Self {
        let raw_id: String = raw_id.into();
        let prefix = format!("{}-", domain.tag());
        let raw_id = match raw_id.strip_prefix(&prefix) {
            Some(rest) => rest.to_string(),
            None => raw_id,
        };
        Self { domain, raw_id }
    }

    /// The flat `"<tag>-<raw>"` key used at the rendering boundary.
    pub fn flat(&self) -> String {
        format!("{}-{}", self.domain.tag(), self.raw_id)
    }

    /// Decompose a flat key back into `(domain, raw id)`.
    ///
    /// Returns `None` when no known tag matches; callers must then fall
    /// back to structural resolution against the raw collections.
    pub fn parse(flat: &str) -> Option<Self> {
        for domain in Domain::ALL {
            if let Some(rest) = flat.strip_prefix(domain.tag()) {
                if let Some(raw_id) = rest.strip_prefix('-') {
                    return Some(Self {
                        domain,
                        raw_id: raw_id.to_string(),
                    });
                }
            }
        }
        None
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.domain.tag(), self.raw_id)
    }
}
