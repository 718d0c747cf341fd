//! Pointer input handling for an interactive surface.
//!
//! ## Architecture
//!
//! The agent keeps an explicit drag lifecycle (`OperationMode`) instead of
//! sharing a mode flag with its host. The host only reads the mode and
//! reacts to the events the agent raises.
//!
//! ## Modules
//!
//! - `agent` - `PointerAgent` state, queries, snapshots, focus/enter/leave
//! - `state` - operation mode state machine
//! - `buttons` - button ids and the held-button set
//! - `coords` - client to surface-local coordinate conversion
//! - `mouse_down` - button down (arms drag detection)
//! - `drag` - movement on local and global scope (threshold, deltas, drag ticks)
//! - `mouse_up` - button up (ends the sequence)
//! - `wheel` - wheel rotation and default-action suppression
//! - `raw` - device event translation and channel routing

mod agent;
mod buttons;
pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod raw;
mod state;
mod wheel;

pub use agent::{PointerAgent, PointerSnapshot};
pub use buttons::{ButtonId, PressedButtons};
pub use coords::{CoordinateConverter, SurfaceBounds, SurfaceGeometry, to_surface_local};
pub use drag::InputScope;
pub use raw::{PointerInput, RawPointerEvent};
pub use state::{ModeTransition, OperationMode};
