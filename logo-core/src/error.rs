//! Error types for canvas operations.

use thiserror::Error;

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur in canvas operations.
///
/// Everything here is recoverable: the editor layer treats a stale element
/// ID as a logged no-op, and history underflow never surfaces as an error
/// at all. Nothing in this crate should abort an editing session.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Element not found on the canvas.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Configuration serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
