//! Semantic pointer events and the host dispatch interface.
//!
//! The host controller owns its own publish/subscribe machinery; the agent
//! only needs a synchronous `raise` that reports whether the event was
//! consumed.

use crate::input::PointerSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic events produced by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEvent {
    /// A button went down on the surface
    Press,
    /// Movement after a press crossed the drag threshold
    BeginDrag,
    /// Global movement while dragging
    Drag,
    /// Button released while dragging
    EndDrag,
    /// Button released without a drag
    Release,
    /// Local movement with no button sequence in progress
    Move,
    /// Wheel rotation over the surface
    Wheel,
    /// Pointer entered the surface
    Enter,
    /// Pointer left the surface
    Leave,
}

impl PointerEvent {
    /// All events, in lifecycle order.
    pub const ALL: [PointerEvent; 9] = [
        PointerEvent::Press,
        PointerEvent::BeginDrag,
        PointerEvent::Drag,
        PointerEvent::EndDrag,
        PointerEvent::Release,
        PointerEvent::Move,
        PointerEvent::Wheel,
        PointerEvent::Enter,
        PointerEvent::Leave,
    ];

    /// Stable event name as seen by host subscribers.
    pub fn name(self) -> &'static str {
        match self {
            PointerEvent::Press => "press",
            PointerEvent::BeginDrag => "begindrag",
            PointerEvent::Drag => "drag",
            PointerEvent::EndDrag => "enddrag",
            PointerEvent::Release => "release",
            PointerEvent::Move => "move",
            PointerEvent::Wheel => "wheel",
            PointerEvent::Enter => "enter",
            PointerEvent::Leave => "leave",
        }
    }

    /// Look an event up by its stable name.
    pub fn from_name(name: &str) -> Option<PointerEvent> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a host dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dispatch {
    /// A subscriber consumed the event
    Handled,
    /// Nobody consumed the event
    #[default]
    Unhandled,
}

impl Dispatch {
    pub fn is_handled(self) -> bool {
        matches!(self, Dispatch::Handled)
    }

    /// Whether the input source must suppress its platform default (only the
    /// wheel channel honors this).
    pub fn prevents_default(self) -> bool {
        self.is_handled()
    }
}

impl From<bool> for Dispatch {
    fn from(handled: bool) -> Self {
        if handled {
            Dispatch::Handled
        } else {
            Dispatch::Unhandled
        }
    }
}

impl From<Option<bool>> for Dispatch {
    fn from(handled: Option<bool>) -> Self {
        handled.unwrap_or(false).into()
    }
}

/// Advisory cursor shapes forwarded to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    Crosshair,
    Grab,
    Grabbing,
    Move,
    Text,
    NotAllowed,
    EwResize,
    NsResize,
}

/// The host controller as seen by the agent.
pub trait PointerHost {
    /// Dispatch `event` synchronously. `args` is only valid for the duration
    /// of the call; copy it to keep it.
    fn raise(&mut self, event: PointerEvent, args: &PointerSnapshot) -> Dispatch;

    /// Presentation hint. No effect on pointer state.
    fn set_cursor(&mut self, _cursor: CursorStyle) {}
}

impl<F> PointerHost for F
where
    F: FnMut(PointerEvent, &PointerSnapshot) -> Dispatch,
{
    fn raise(&mut self, event: PointerEvent, args: &PointerSnapshot) -> Dispatch {
        self(event, args)
    }
}
