//! Cart store error taxonomy.
//!
//! All store operations return `Result<T, CartError>`. I/O failures are
//! surfaced, never swallowed: a caller that ignores the result gets the old
//! fire-and-forget behavior, a caller that awaits it gets an explicit
//! durability signal.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by [`CartStore`](crate::CartStore) operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed to read or write the durable record.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The durable record exists but is not a valid serialized cart.
    #[error("malformed cart record: {0}")]
    Parse(#[source] serde_json::Error),

    /// The in-memory cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),
}
