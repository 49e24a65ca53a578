//! The calendar engine facade.
//!
//! Binds configuration, the reschedule session, and the pure pipeline
//! (aggregate, project, route) behind one owner. Aggregation and projection
//! stay stateless; the session descriptor is the only mutable state the
//! engine holds between calls.

use crate::config::Config;
use crate::drag::{MoveIntent, RescheduleSession};
use crate::records::RecordSet;
use crate::route::{route, UpdateSinks};
use crate::timeline::{aggregate, CanonicalEvent, DomainToggles, TimelineStats};
use crate::view::{project, HourWindow, ViewOptions, ViewProjection};

/// The unified calendar engine.
pub struct CalendarEngine {
    config: Config,
    session: RescheduleSession,
}

impl Default for CalendarEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl CalendarEngine {
    /// Create an engine from configuration.
    pub fn new(config: Config) -> Self {
        let session = RescheduleSession::from_config(&config.drag);
        Self { config, session }
    }

    /// The visible-hours window from this engine's configuration.
    pub fn window(&self) -> HourWindow {
        HourWindow::from(&self.config.view)
    }

    /// Recompute the canonical event set from the current collections.
    pub fn timeline(&self, toggles: &DomainToggles, records: &RecordSet) -> Vec<CanonicalEvent> {
        aggregate(toggles, records)
    }

    /// Aggregate and project in one pass. The options carry the window;
    /// [`CalendarEngine::window`] supplies the configured one.
    pub fn view(
        &self,
        toggles: &DomainToggles,
        records: &RecordSet,
        options: ViewOptions,
    ) -> ViewProjection {
        let events = aggregate(toggles, records);
        project(&events, &options)
    }

    /// Summary statistics over one aggregation pass.
    pub fn stats(&self, toggles: &DomainToggles, records: &RecordSet) -> TimelineStats {
        TimelineStats::compute(&aggregate(toggles, records))
    }

    /// The live reschedule session; gesture adapters feed it events.
    pub fn session_mut(&mut self) -> &mut RescheduleSession {
        &mut self.session
    }

    /// Route a completed move intent to the correct domain update.
    /// Fire-and-forget: the authoritative store reflects the change back
    /// through the collections on the next pass.
    pub fn apply_move(&self, intent: &MoveIntent, records: &RecordSet, sinks: &mut UpdateSinks) {
        route(intent, records, sinks);
    }
}
