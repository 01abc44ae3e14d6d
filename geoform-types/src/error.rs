//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoformError {
    /// Wrong arity or component type given to a coordinate or geometry constructor.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Attempt to change a part of an immutable value.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// Coordinate cannot be represented in the target coordinate system.
    #[error("projection failed: {0}")]
    Projection(String),
}

impl GeoformError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
