//! Pointer movement - drag threshold detection, movement deltas and drag
//! ticks.
//!
//! ## Scopes
//!
//! Movement arrives on two scopes. The local scope reports movement over the
//! surface element; the global scope reports movement anywhere (window-level
//! capture), so a drag keeps working after the pointer leaves the element.
//!
//! - Local: outside a button sequence, updates movement and raises `move`
//!   when the pointer actually moved.
//! - Global: always updates movement; while dragging raises `drag` on every
//!   event, zero delta included.
//!
//! Both scopes run the threshold check while a press is waiting for it, and
//! the `begindrag` payload always carries the point that crossed it.
//!
//! ## Performance Notes
//!
//! Move is the hottest input path. The handler does a constant amount of
//! work and takes one snapshot per raised event.

use crate::events::{Dispatch, PointerEvent, PointerHost};
use crate::input::agent::{PointerAgent, PointerSnapshot};
use crate::point::Point;
use crate::profile_scope;
use crate::settings::ThresholdProbe;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a move event was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputScope {
    /// Over the surface element
    Local,
    /// Anywhere, captured at window level
    Global,
}

impl<H: PointerHost> PointerAgent<H> {
    /// Handle pointer movement to surface-local `(x, y)` seen on `scope`.
    ///
    /// Returns the dispatch of the last event raised, or `Unhandled` when
    /// nothing was raised.
    pub fn move_to(&mut self, x: f64, y: f64, scope: InputScope) -> Dispatch {
        profile_scope!("handle_move");

        let to = Point::new(x, y);
        let previous = self.position;

        match scope {
            InputScope::Local => {
                if self.mode.is_drag_ready() && self.exceeds_drag_threshold(previous, to) {
                    // Local moves don't track during a button sequence, so the
                    // payload carries the crossing point explicitly.
                    let args = self.snapshot_at(to);
                    return self.begin_drag(args);
                }
                if self.mode.is_idle() {
                    let movement = self.track_position(to);
                    if !movement.is_zero() {
                        return self.raise(PointerEvent::Move);
                    }
                }
                Dispatch::Unhandled
            }
            InputScope::Global => {
                self.track_position(to);

                let mut dispatch = Dispatch::Unhandled;
                if self.mode.is_drag_ready() && self.exceeds_drag_threshold(previous, to) {
                    dispatch = self.begin_drag(self.snapshot());
                }
                if self.mode.is_dragging() {
                    dispatch = self.raise(PointerEvent::Drag);
                }
                dispatch
            }
        }
    }

    fn exceeds_drag_threshold(&self, previous: Point, to: Point) -> bool {
        let point = match self.settings.threshold_probe {
            ThresholdProbe::EventPosition => to,
            ThresholdProbe::LastPosition => previous,
        };
        point.delta(self.dragstart).abs_max_axis() > self.settings.drag_threshold
    }

    fn begin_drag(&mut self, args: PointerSnapshot) -> Dispatch {
        match self.mode.begin_drag() {
            Ok(transition) => debug_assert!(transition.began_drag()),
            Err(e) => {
                debug!("Drag start rejected: {}", e);
                return Dispatch::Unhandled;
            }
        }
        debug!(
            start_x = self.dragstart.x,
            start_y = self.dragstart.y,
            x = args.position.x,
            y = args.position.y,
            "Drag started"
        );
        self.raise_with(PointerEvent::BeginDrag, args)
    }
}
