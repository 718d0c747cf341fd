//! The pointer agent: owned pointer state, queries and snapshots.
//!
//! Channel handlers live next to this file (`mouse_down`, `drag`,
//! `mouse_up`, `wheel`); this module holds the state they share and the
//! channels that carry no drag logic (focus loss, enter, leave).

use crate::events::{CursorStyle, Dispatch, PointerEvent, PointerHost};
use crate::input::buttons::{ButtonId, PressedButtons};
use crate::input::state::OperationMode;
use crate::point::Point;
use crate::settings::PointerSettings;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Point-in-time copy of the pointer state passed along with every event.
///
/// All fields are plain values, so a snapshot never changes after it was
/// taken no matter what the agent processes next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSnapshot {
    pub position: Point,
    pub movement: Point,
    pub dragstart: Point,
    pub dragend: Point,
    pub wheeldelta: f64,
}

/// Pointer state machine for one surface.
///
/// Owns the host handle it reports to. All methods take `&mut self` and run
/// to completion synchronously; events are raised from inside the call that
/// caused them.
pub struct PointerAgent<H> {
    pub(super) host: H,
    pub(super) settings: PointerSettings,
    pub(super) mode: OperationMode,
    pub(super) position: Point,
    pub(super) movement: Point,
    pub(super) dragstart: Point,
    pub(super) dragend: Point,
    pub(super) wheeldelta: f64,
    pub(super) pressed: PressedButtons,
    pub(super) first_movement_update: bool,
}

impl<H: PointerHost> PointerAgent<H> {
    pub fn new(host: H) -> Self {
        Self::with_settings(host, PointerSettings::default())
    }

    pub fn with_settings(host: H, settings: PointerSettings) -> Self {
        Self {
            host,
            settings,
            mode: OperationMode::None,
            position: Point::zero(),
            movement: Point::zero(),
            dragstart: Point::zero(),
            dragend: Point::zero(),
            wheeldelta: 0.0,
            pressed: PressedButtons::new(),
            first_movement_update: true,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Whether `button` is currently held.
    pub fn is_button_pressed(&self, button: ButtonId) -> bool {
        self.pressed.contains(button)
    }

    /// Copy of the held-button set.
    pub fn pressed_buttons(&self) -> PressedButtons {
        self.pressed
    }

    /// Current drag lifecycle mode. The agent is its only writer.
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    /// Last recorded pointer position (surface-local).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Delta between the last two recorded positions.
    pub fn movement(&self) -> Point {
        self.movement
    }

    /// Position of the last press.
    pub fn drag_start(&self) -> Point {
        self.dragstart
    }

    /// Position where the last drag ended.
    pub fn drag_end(&self) -> Point {
        self.dragend
    }

    /// Delta of the last wheel event.
    pub fn wheel_delta(&self) -> f64 {
        self.wheeldelta
    }

    /// Active drag settings.
    pub fn settings(&self) -> &PointerSettings {
        &self.settings
    }

    /// The host this agent reports to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to drain recorded events.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the agent and hand the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Independent copy of the state for an outgoing event.
    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            position: self.position,
            movement: self.movement,
            dragstart: self.dragstart,
            dragend: self.dragend,
            wheeldelta: self.wheeldelta,
        }
    }

    // ------------------------------------------------------------------
    // Channels without drag logic
    // ------------------------------------------------------------------

    /// Focus left the window. A button released elsewhere never reports its
    /// release, so every held button is dropped.
    pub fn focus_lost(&mut self) {
        if !self.pressed.is_empty() {
            trace!(held = self.pressed.len(), "Focus lost, clearing held buttons");
        }
        self.pressed.clear();
    }

    /// Pointer entered the surface. No state change.
    pub fn enter(&mut self) -> Dispatch {
        self.raise(PointerEvent::Enter)
    }

    /// Pointer left the surface. No state change.
    pub fn leave(&mut self) -> Dispatch {
        self.raise(PointerEvent::Leave)
    }

    /// Forward a cursor hint to the presentation layer.
    pub fn set_cursor_hint(&mut self, cursor: CursorStyle) {
        self.host.set_cursor(cursor);
    }

    /// Snapshot as it would read after tracking a move to `to`, without
    /// touching the live state.
    pub(super) fn snapshot_at(&self, to: Point) -> PointerSnapshot {
        let movement = if self.first_movement_update {
            Point::zero()
        } else {
            to.delta(self.position)
        };
        PointerSnapshot {
            position: to,
            movement,
            ..self.snapshot()
        }
    }

    /// Raise `event` with a snapshot taken now.
    pub(super) fn raise(&mut self, event: PointerEvent) -> Dispatch {
        let args = self.snapshot();
        self.raise_with(event, args)
    }

    pub(super) fn raise_with(&mut self, event: PointerEvent, args: PointerSnapshot) -> Dispatch {
        let dispatch = self.host.raise(event, &args);
        trace!(%event, handled = dispatch.is_handled(), "Raised pointer event");
        dispatch
    }

    /// Record a move to `to`, returning the new movement delta.
    pub(super) fn track_position(&mut self, to: Point) -> Point {
        if self.first_movement_update {
            self.movement = Point::zero();
            self.first_movement_update = false;
        } else {
            self.movement = to.delta(self.position);
        }
        self.position = to;
        self.movement
    }
}

impl<H: PointerHost + Default> Default for PointerAgent<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}
