//! Typed error enum for the service layer.
//!
//! Unifies storage and validation failures into a single error type so handlers
//! can map each failure mode to a response. Geocoder outages never surface here:
//! they are logged and treated as a miss.

use sandwich_map_core::CoreError;
use sandwich_map_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and validation failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (database, unknown id, duplicate vendor).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Domain validation rejected the input (bad price, coordinate, topping).
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Caller provided invalid input. The message is user-facing.
    #[error("{0}")]
    InvalidInput(String),

    /// A lookup the caller depended on came back empty. The message is user-facing.
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }

    /// Whether the caller caused this error (as opposed to the server).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Core(_)
                | Self::InvalidInput(_)
                | Self::NotFound(_)
                | Self::Storage(StorageError::NotFound { .. })
        ) || self.is_duplicate()
    }
}
