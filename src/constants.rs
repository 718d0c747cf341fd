//! Input-wide constants.
//!
//! Centralizes magic numbers so thresholds and button codes are
//! self-documenting.

// ============================================================================
// Drag Detection
// ============================================================================

/// Default per-axis displacement (surface-local units) a pressed pointer must
/// exceed before the press is classified as a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 3.0;

// ============================================================================
// Raw Button Codes
// ============================================================================

/// Device code of the primary button
pub const BUTTON_CODE_LEFT: i16 = 0;

/// Device code of the auxiliary (wheel) button
pub const BUTTON_CODE_MIDDLE: i16 = 1;

/// Device code of the secondary button
pub const BUTTON_CODE_RIGHT: i16 = 2;

// ============================================================================
// Profiling
// ============================================================================

/// A single input handler should finish well inside one 60 FPS frame.
pub const HANDLER_WARN_MS: f64 = 4.0;

/// Number of samples kept per channel for rolling statistics
pub const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Settings
// ============================================================================

/// File name of the persisted pointer settings
pub const SETTINGS_FILE_NAME: &str = "pointer.json";

/// Application directory under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "pointer-agent";
