//! Channel adapters: raw input events translated into session transitions.
//!
//! The two delivery mechanisms (native pointer drag-and-drop and touch
//! long-press) produce differently-shaped event streams; each adapter maps
//! its stream onto the one [`RescheduleSession`] so move-intent construction
//! lives in exactly one place.

use chrono::{DateTime, Utc};

use super::session::{GestureFeedback, GridCell, MoveIntent, RescheduleSession};

/// Events delivered by the native drag-and-drop channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// Drag started; the event id rides along as the transfer payload.
    DragStart { event_id: String },
    /// Drop landed on a grid cell.
    DropOn { cell: GridCell },
    /// Drag ended outside any drop target.
    Cancel,
}

/// Events delivered by the touch channel. Every event carries its own
/// timestamp; the session compares them against the hold deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchEvent {
    Start {
        event_id: String,
        at: DateTime<Utc>,
    },
    Move {
        at: DateTime<Utc>,
    },
    /// Finger lifted; `cell` is the hit-tested cell under the release
    /// point, if the release landed on the grid.
    End {
        at: DateTime<Utc>,
        cell: Option<GridCell>,
    },
}

/// What one gesture event produced.
#[derive(Debug, Default)]
pub struct GestureOutcome {
    /// A completed move intent, ready for the mutation router.
    pub intent: Option<MoveIntent>,
    /// A caller-visible signal (haptics hook).
    pub feedback: Option<GestureFeedback>,
}

impl RescheduleSession {
    /// Feed one pointer-channel event through the session.
    pub fn apply_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        match event {
            PointerEvent::DragStart { event_id } => {
                self.pointer_begin(event_id);
                GestureOutcome::default()
            }
            PointerEvent::DropOn { cell } => GestureOutcome {
                intent: self.pointer_drop(cell),
                feedback: None,
            },
            PointerEvent::Cancel => {
                self.pointer_cancel();
                GestureOutcome::default()
            }
        }
    }

    /// Feed one touch-channel event through the session.
    pub fn apply_touch(&mut self, event: TouchEvent) -> GestureOutcome {
        match event {
            TouchEvent::Start { event_id, at } => {
                self.touch_begin(event_id, at);
                GestureOutcome::default()
            }
            TouchEvent::Move { at } => GestureOutcome {
                intent: None,
                feedback: self.touch_move(at),
            },
            TouchEvent::End { at, cell } => GestureOutcome {
                intent: self.touch_end(at, cell),
                feedback: None,
            },
        }
    }
}
