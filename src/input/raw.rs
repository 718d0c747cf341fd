//! Routing of device events into the agent's channels.
//!
//! Device events carry client coordinates and come from two listeners: the
//! surface element (press, local move, wheel, enter, leave) and the window
//! (global move, release, focus loss). [`PointerInput::from_raw`] translates
//! them into surface-local [`PointerInput`]s, and
//! [`PointerAgent::handle`] feeds those to the matching channel.

use crate::error::PointerResult;
use crate::events::{Dispatch, PointerHost};
use crate::input::agent::PointerAgent;
use crate::input::coords::{SurfaceGeometry, to_surface_local};
use crate::input::drag::InputScope;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// A device event as delivered by the platform, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RawPointerEvent {
    ButtonDown { button: i16, client: Point },
    ButtonUp { button: i16 },
    Motion { client: Point, scope: InputScope },
    Wheel { delta: f64 },
    Enter,
    Leave,
    FocusLost,
}

/// A surface-local input for one of the agent's channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    Press { button: i16, position: Point },
    Release { button: i16 },
    Move { position: Point, scope: InputScope },
    Wheel { delta: f64 },
    Enter,
    Leave,
    FocusLost,
}

impl PointerInput {
    /// Translate a device event, measuring `surface` for events that carry
    /// coordinates.
    pub fn from_raw<G>(raw: RawPointerEvent, surface: &G) -> PointerResult<PointerInput>
    where
        G: SurfaceGeometry + ?Sized,
    {
        Ok(match raw {
            RawPointerEvent::ButtonDown { button, client } => PointerInput::Press {
                button,
                position: to_surface_local(client, surface)?,
            },
            RawPointerEvent::ButtonUp { button } => PointerInput::Release { button },
            RawPointerEvent::Motion { client, scope } => PointerInput::Move {
                position: to_surface_local(client, surface)?,
                scope,
            },
            RawPointerEvent::Wheel { delta } => PointerInput::Wheel { delta },
            RawPointerEvent::Enter => PointerInput::Enter,
            RawPointerEvent::Leave => PointerInput::Leave,
            RawPointerEvent::FocusLost => PointerInput::FocusLost,
        })
    }
}

impl<H: PointerHost> PointerAgent<H> {
    /// Feed one input to its channel.
    ///
    /// Focus loss raises nothing and always reports `Unhandled`.
    pub fn handle(&mut self, input: PointerInput) -> Dispatch {
        match input {
            PointerInput::Press { button, position } => self.press(button, position.x, position.y),
            PointerInput::Release { button } => self.release(button),
            PointerInput::Move { position, scope } => self.move_to(position.x, position.y, scope),
            PointerInput::Wheel { delta } => self.wheel(delta),
            PointerInput::Enter => self.enter(),
            PointerInput::Leave => self.leave(),
            PointerInput::FocusLost => {
                self.focus_lost();
                Dispatch::Unhandled
            }
        }
    }

    /// Translate and feed a device event in one step.
    pub fn handle_raw<G>(&mut self, raw: RawPointerEvent, surface: &G) -> PointerResult<Dispatch>
    where
        G: SurfaceGeometry + ?Sized,
    {
        let input = PointerInput::from_raw(raw, surface)?;
        Ok(self.handle(input))
    }
}
