//! Error types for engine construction and settings parsing.

use thiserror::Error;

/// Errors surfaced by the gesture engine.
///
/// Marker or drop-zone resolution misses are not errors; they suppress the
/// corresponding event instead.
#[derive(Error, Debug)]
pub enum GestureError {
    /// The container handed to the engine is not part of the surface
    #[error("container element {0} is not attached to the surface")]
    InvalidContainer(String),

    /// Settings JSON could not be parsed
    #[error("invalid gesture settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type alias for gesture engine operations
pub type GestureResult<T> = Result<T, GestureError>;
