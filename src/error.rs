//! Error types for the fallible edges of the index

use thiserror::Error;

/// Result type alias for vector space operations
pub type Result<T> = std::result::Result<T, SpaceError>;

/// Errors raised outside the core add/remove/query contract, which never fails.
#[derive(Error, Debug)]
pub enum SpaceError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid coordinates: {reason}")]
    InvalidCoordinates { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SpaceError {
    fn from(err: serde_json::Error) -> Self {
        SpaceError::SerializationError(err.to_string())
    }
}
