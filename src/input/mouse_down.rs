//! Button down - starts a button sequence and arms drag detection.

use crate::events::{Dispatch, PointerEvent, PointerHost};
use crate::input::agent::PointerAgent;
use crate::input::buttons::ButtonId;
use crate::point::Point;
use crate::profile_scope;
use tracing::trace;

impl<H: PointerHost> PointerAgent<H> {
    /// Handle a button going down at surface-local `(x, y)`.
    ///
    /// Restarts delta accumulation at the press point and arms drag
    /// detection. `begindrag` is never raised here; only a later move past
    /// the threshold raises it.
    pub fn press(&mut self, button_code: i16, x: f64, y: f64) -> Dispatch {
        profile_scope!("handle_press");

        self.position = Point::new(x, y);
        self.movement = Point::zero();
        self.dragstart = self.position;

        match ButtonId::from_code(button_code) {
            Some(button) => {
                self.pressed.insert(button);
            }
            None => trace!(button_code, "Ignoring unmapped button code"),
        }

        let transition = self.mode.arm();
        trace!(from = ?transition.from, x, y, "Press armed drag detection");

        self.raise(PointerEvent::Press)
    }
}
