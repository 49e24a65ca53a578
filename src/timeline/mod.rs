//! The canonical timeline model and its producers.
//!
//! This module owns the full fan-in path: loose store shapes are normalized
//! by [`datetime`], stamped with a reversible identity by [`identity`],
//! converted one record at a time by the [`adapt`] adapters, and merged into
//! a single deduplicated event set by [`aggregate`]. Canonical events are a
//! pure projection: they are recomputed from scratch whenever an input
//! collection or a domain toggle changes, and discarded after projection.

pub mod adapt;
mod aggregate;
mod datetime;
mod identity;
mod types;

pub use adapt::ALL_DAY_LABEL;
pub use aggregate::{aggregate, DomainCount, DomainToggles, TimelineStats};
pub use datetime::{normalize, ClockTime, RawDate};
pub use identity::{Domain, EventKey};
pub use types::{CanonicalEvent, SourceRecord, StyleToken};
