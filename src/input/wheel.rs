//! Wheel input - the one channel whose dispatch result flows back to the
//! input source.

use crate::events::{Dispatch, PointerEvent, PointerHost};
use crate::input::agent::PointerAgent;
use crate::profile_scope;

impl<H: PointerHost> PointerAgent<H> {
    /// Record the wheel delta and raise `wheel`.
    ///
    /// When the result is `Dispatch::Handled` the caller must suppress the
    /// platform's default scrolling for this event
    /// (see [`Dispatch::prevents_default`]).
    pub fn wheel(&mut self, delta: f64) -> Dispatch {
        profile_scope!("handle_wheel");

        self.wheeldelta = delta;
        self.raise(PointerEvent::Wheel)
    }
}
