//! The reschedule-session state machine.
//!
//! One machine serves both input channels. Pointer drags jump straight to
//! `Dragging`; touch gestures pass through `Pending` until the hold
//! threshold elapses. The threshold is explicit-clock based: every gesture
//! event carries its own timestamp and the session compares it against a
//! stored deadline, so there is no scheduled callback to cancel and nothing
//! to leak into a later touch sequence.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DragConfig;

// ============================================================================
// Grid Cells and Move Intents
// ============================================================================

/// A drop target: one cell of the calendar grid, tagged with its own date
/// and hour so hit-testing needs no global lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GridCell {
    pub date: NaiveDate,
    pub hour: u32,
}

impl GridCell {
    /// Create a cell, clamping the hour into the valid range.
    pub fn new(date: NaiveDate, hour: u32) -> Self {
        Self {
            date,
            hour: hour.min(23),
        }
    }
}

/// The normalized outcome of a completed drag gesture: move this event to
/// that date and hour. Minutes are always zeroed by a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MoveIntent {
    pub event_id: String,
    pub target_date: NaiveDate,
    pub target_hour: u32,
}

impl MoveIntent {
    fn new(event_id: String, cell: GridCell) -> Self {
        Self {
            event_id,
            target_date: cell.date,
            target_hour: cell.hour,
        }
    }
}

/// Caller-visible signal that a touch hold crossed the threshold; the hook
/// for haptic feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureFeedback {
    HoldEngaged,
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Idle,
    /// Touch is down but the hold threshold has not elapsed yet.
    Pending {
        event_id: String,
        deadline: DateTime<Utc>,
    },
    Dragging {
        event_id: String,
    },
}

/// The single active reschedule session.
///
/// Only one session exists at a time; starting a new gesture while another
/// is active adopts the new one (last-session-wins) instead of crashing.
#[derive(Debug)]
pub struct RescheduleSession {
    state: SessionState,
    hold_threshold: Duration,
}

impl Default for RescheduleSession {
    fn default() -> Self {
        Self::from_config(&DragConfig::default())
    }
}

impl RescheduleSession {
    /// Create a session with an explicit hold threshold.
    pub fn new(hold_threshold: Duration) -> Self {
        Self {
            state: SessionState::Idle,
            hold_threshold,
        }
    }

    /// Create a session from drag configuration.
    pub fn from_config(config: &DragConfig) -> Self {
        Self::new(Duration::milliseconds(config.hold_threshold_ms as i64))
    }

    /// Whether a gesture is currently in flight.
    pub fn is_active(&self) -> bool {
        self.state != SessionState::Idle
    }

    /// The id being dragged, if any.
    pub fn dragging_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::Dragging { event_id } => Some(event_id),
            _ => None,
        }
    }

    fn adopt(&mut self, next: SessionState) {
        if self.state != SessionState::Idle {
            debug!("gesture started while a session was active; adopting the new one");
        }
        self.state = next;
    }

    // ========================================================================
    // Pointer Channel
    // ========================================================================

    /// A native drag started; the event id is the transfer payload.
    pub fn pointer_begin(&mut self, event_id: impl Into<String>) {
        self.adopt(SessionState::Dragging {
            event_id: event_id.into(),
        });
    }

    /// A drop landed on a grid cell.
    pub fn pointer_drop(&mut self, cell: GridCell) -> Option<MoveIntent> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Dragging { event_id } => Some(MoveIntent::new(event_id, cell)),
            _ => {
                debug!("drop without an active pointer drag; ignoring");
                None
            }
        }
    }

    /// The drag ended outside any drop target.
    pub fn pointer_cancel(&mut self) {
        self.state = SessionState::Idle;
    }

    // ========================================================================
    // Touch Channel
    // ========================================================================

    /// A finger went down on an event block.
    pub fn touch_begin(&mut self, event_id: impl Into<String>, at: DateTime<Utc>) {
        self.adopt(SessionState::Pending {
            event_id: event_id.into(),
            deadline: at + self.hold_threshold,
        });
    }

    /// The finger moved. Before the hold deadline this is a scroll and the
    /// session cancels; at or past the deadline the hold engages and the
    /// caller starts hit-testing cells under the finger.
    pub fn touch_move(&mut self, at: DateTime<Utc>) -> Option<GestureFeedback> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Pending { event_id, deadline } => {
                if at >= deadline {
                    self.state = SessionState::Dragging { event_id };
                    Some(GestureFeedback::HoldEngaged)
                } else {
                    debug!("touch moved before the hold threshold; treating as scroll");
                    None
                }
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// The finger lifted. `cell` is the grid cell under the release point,
    /// if any. A release before the hold deadline emits nothing; that is
    /// how a tap stays a tap.
    pub fn touch_end(&mut self, at: DateTime<Utc>, cell: Option<GridCell>) -> Option<MoveIntent> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Dragging { event_id } => cell.map(|c| MoveIntent::new(event_id, c)),
            SessionState::Pending { event_id, deadline } => {
                if at >= deadline {
                    // The hold elapsed without an intervening move event.
                    cell.map(|c| MoveIntent::new(event_id, c))
                } else {
                    None
                }
            }
            SessionState::Idle => None,
        }
    }
}
