//! Operation mode state machine - the drag lifecycle of a button sequence.
//!
//! The agent is the only writer of the mode. Hosts read it through
//! [`PointerAgent::mode`](super::PointerAgent::mode) and observe changes
//! through the `begindrag`/`enddrag`/`release` events.
//!
//! ## State Transitions
//!
//! ```text
//! None      -> DragReady   (button down)
//! DragReady -> Dragging    (movement past the drag threshold)
//! DragReady -> None        (button up before the threshold was crossed)
//! Dragging  -> None        (button up)
//! ```
//!
//! A second button down while a sequence is in progress re-arms the
//! sequence (`DragReady`/`Dragging -> DragReady`).

use crate::error::{PointerError, PointerResult};
use serde::{Deserialize, Serialize};

/// Interaction mode of the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationMode {
    /// No button sequence in progress
    #[default]
    None,
    /// A button is down; movement has not crossed the drag threshold yet
    DragReady,
    /// Button down and the threshold was crossed
    Dragging,
}

/// A mode change that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: OperationMode,
    pub to: OperationMode,
}

impl ModeTransition {
    /// True when this transition started a drag.
    pub fn began_drag(&self) -> bool {
        self.from == OperationMode::DragReady && self.to == OperationMode::Dragging
    }

    /// True when this transition finished a drag.
    pub fn ended_drag(&self) -> bool {
        self.from == OperationMode::Dragging && self.to == OperationMode::None
    }
}

impl OperationMode {
    /// Returns true if no button sequence is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true while waiting for the drag threshold
    pub fn is_drag_ready(&self) -> bool {
        matches!(self, Self::DragReady)
    }

    /// Returns true once a drag has begun
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Whether `self -> to` is part of the drag lifecycle.
    pub fn can_transition_to(&self, to: OperationMode) -> bool {
        use OperationMode::*;
        matches!(
            (*self, to),
            (None, DragReady)
                | (DragReady, DragReady)
                | (Dragging, DragReady)
                | (DragReady, Dragging)
                | (DragReady, None)
                | (Dragging, None)
        )
    }

    /// Move to `to`, rejecting transitions outside the drag lifecycle.
    pub fn transition(&mut self, to: OperationMode) -> PointerResult<ModeTransition> {
        if !self.can_transition_to(to) {
            return Err(PointerError::InvalidTransition { from: *self, to });
        }
        let from = std::mem::replace(self, to);
        Ok(ModeTransition { from, to })
    }

    /// Button down: (re-)arm drag detection. Always allowed.
    pub fn arm(&mut self) -> ModeTransition {
        let from = std::mem::replace(self, Self::DragReady);
        ModeTransition { from, to: Self::DragReady }
    }

    /// Threshold crossed. Only valid from `DragReady`.
    pub fn begin_drag(&mut self) -> PointerResult<ModeTransition> {
        self.transition(Self::Dragging)
    }

    /// Button up: back to `None` from any mode.
    pub fn finish(&mut self) -> ModeTransition {
        let from = std::mem::replace(self, Self::None);
        ModeTransition { from, to: Self::None }
    }
}
