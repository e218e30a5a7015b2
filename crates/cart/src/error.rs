//! Engine error type.
//!
//! Reads never produce errors (fail-soft, see [`crate::store`]); only
//! writes and clears do. Cart state is a non-critical client-side cache,
//! so every variant here is recoverable: callers may log and move on
//! without corrupting the persisted cart.

use thiserror::Error;

use crate::storage::StorageError;

/// Error from a cart mutation.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The storage backend rejected a write or clear.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart could not be serialized for persistence.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
