//! Error types for pointer operations.
//!
//! Channel handlers never fail. Errors come from coordinate translation,
//! explicit mode transitions and settings persistence.

use crate::input::OperationMode;
use thiserror::Error;

/// Errors that can occur around the pointer agent
#[derive(Error, Debug)]
pub enum PointerError {
    /// The surface could not report its bounding geometry
    #[error("surface has no measurable bounds; attach it before routing pointer events")]
    MissingBounds,

    /// A mode change outside the drag lifecycle
    #[error("invalid operation mode transition: {from:?} -> {to:?}")]
    InvalidTransition { from: OperationMode, to: OperationMode },

    /// Drag threshold must be finite and non-negative
    #[error("invalid drag threshold: {0}")]
    InvalidThreshold(f64),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for pointer operations
pub type PointerResult<T> = Result<T, PointerError>;

impl From<String> for PointerError {
    fn from(s: String) -> Self {
        PointerError::Other(s)
    }
}

impl From<&str> for PointerError {
    fn from(s: &str) -> Self {
        PointerError::Other(s.to_string())
    }
}
