//! Pocket Market Cart - the persisted cart store.
//!
//! This crate owns the in-memory cart for one session, mirrors every
//! mutation to a durable key-value record, and restores that record on
//! startup. Construct one [`CartStore`] at application startup and hand it
//! to whichever components need it; there is no ambient global cart.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_market_cart::{CartConfig, CartStore, FileStorage};
//!
//! let storage = FileStorage::new(data_dir);
//! let mut store = CartStore::new(storage, &CartConfig::default());
//! store.restore().await?;
//!
//! store.add_to_cart(shirt).await?;
//! store.increment(&shirt_id).await?;
//! assert_eq!(store.total_quantity(), 2);
//! ```
//!
//! # Modules
//!
//! - [`store`] - The [`CartStore`] and its mutation operations
//! - [`storage`] - The async key-value [`Storage`] adapter and backends
//! - [`config`] - Storage namespace configuration
//! - [`error`] - The [`CartError`] taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::CartError;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::CartStore;
