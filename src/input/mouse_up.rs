//! Button up - finishes the button sequence.
//!
//! Release is observed at global scope, so a drag that ends outside the
//! surface element still ends.

use crate::events::{Dispatch, PointerEvent, PointerHost};
use crate::input::agent::PointerAgent;
use crate::input::buttons::ButtonId;
use crate::profile_scope;
use tracing::{debug, trace};

impl<H: PointerHost> PointerAgent<H> {
    /// Handle a button going up. Raises `enddrag` if a drag was in progress,
    /// `release` otherwise, then returns the mode to `None`.
    pub fn release(&mut self, button_code: i16) -> Dispatch {
        profile_scope!("handle_release");

        let dispatch = if self.mode.is_dragging() {
            self.dragend = self.position;
            debug!(end_x = self.dragend.x, end_y = self.dragend.y, "Drag ended");
            self.raise(PointerEvent::EndDrag)
        } else {
            self.raise(PointerEvent::Release)
        };

        match ButtonId::from_code(button_code) {
            Some(button) => {
                self.pressed.remove(button);
            }
            None => trace!(button_code, "Ignoring unmapped button code"),
        }

        let transition = self.mode.finish();
        trace!(
            from = ?transition.from,
            ended_drag = transition.ended_drag(),
            "Button sequence finished"
        );
        dispatch
    }
}
