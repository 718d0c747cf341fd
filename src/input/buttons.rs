//! Button identifiers and the held-button set.

use crate::constants::{BUTTON_CODE_LEFT, BUTTON_CODE_MIDDLE, BUTTON_CODE_RIGHT};
use serde::{Deserialize, Serialize};

/// Logical pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    None,
    Left,
    Middle,
    Right,
}

impl ButtonId {
    /// Map a raw device button code. Codes without a canonical button
    /// (3 and up, negatives) map to nothing.
    pub fn from_code(code: i16) -> Option<ButtonId> {
        match code {
            BUTTON_CODE_LEFT => Some(ButtonId::Left),
            BUTTON_CODE_MIDDLE => Some(ButtonId::Middle),
            BUTTON_CODE_RIGHT => Some(ButtonId::Right),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            ButtonId::None => 0,
            ButtonId::Left => 1 << 0,
            ButtonId::Middle => 1 << 1,
            ButtonId::Right => 1 << 2,
        }
    }
}

/// Set of currently held buttons. Each button is present at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PressedButtons {
    bits: u8,
}

impl PressedButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `button`. Returns false if it was already held. `ButtonId::None`
    /// is never stored.
    pub fn insert(&mut self, button: ButtonId) -> bool {
        if button == ButtonId::None {
            return false;
        }
        let was_held = self.contains(button);
        self.bits |= button.bit();
        !was_held
    }

    /// Remove `button`. Returns false if it was not held.
    pub fn remove(&mut self, button: ButtonId) -> bool {
        let was_held = self.contains(button);
        self.bits &= !button.bit();
        was_held
    }

    pub fn contains(&self, button: ButtonId) -> bool {
        self.bits & button.bit() != 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Held buttons in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = ButtonId> + '_ {
        [ButtonId::Left, ButtonId::Middle, ButtonId::Right]
            .into_iter()
            .filter(move |button| self.contains(*button))
    }
}
