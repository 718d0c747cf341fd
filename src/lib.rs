//! Pointer interaction state machine for interactive surfaces.
//!
//! A [`PointerAgent`] turns raw pointer-device events (button down/up,
//! movement, wheel, focus loss) into a normalized interaction model: current
//! position, frame-to-frame movement, drag lifecycle and held buttons. The
//! host controller receives semantic [`PointerEvent`]s together with a
//! [`PointerSnapshot`] through the [`PointerHost`] trait.
//!
//! ## Modules
//!
//! - `point` - 2D value type used for positions and deltas
//! - `input` - the agent, its state machine and per-channel handlers
//! - `events` - semantic events and the host dispatch interface
//! - `settings` - drag threshold and threshold probe configuration
//! - `perf` - profiling instrumentation for the input handlers

pub mod constants;
pub mod error;
pub mod events;
pub mod input;
pub mod perf;
pub mod point;
pub mod settings;

pub use error::{PointerError, PointerResult};
pub use events::{CursorStyle, Dispatch, PointerEvent, PointerHost};
pub use input::{
    ButtonId, InputScope, ModeTransition, OperationMode, PointerAgent, PointerInput,
    PointerSnapshot, PressedButtons, RawPointerEvent, SurfaceBounds, SurfaceGeometry,
};
pub use point::Point;
pub use settings::{PointerSettings, ThresholdProbe};
