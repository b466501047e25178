//! Async key-value storage adapters for the durable cart record.
//!
//! The cart store only needs two operations from its backend: read one
//! string value by key, write one string value by key. The record is always
//! written whole; backends never do partial-field updates.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - process-local map, used in tests
//! - [`FileStorage`] - one file per key under a root directory, the
//!   device-local durable backend

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// An async key-value store holding whole-record string values.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
