//! Errors raised by the whiteboard editor.

use crate::shapes::ShapeId;
use thiserror::Error;

/// Canvas errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("Editor has not finished initializing")]
    NotReady,
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
