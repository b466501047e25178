//! Integration tests for Pocket Market.
//!
//! # Test Categories
//!
//! - `cart_lifecycle` - Mutation semantics against in-memory storage
//! - `cart_persistence` - Durability and restore against file storage
//!
//! This lib provides shared fixtures: catalog-shaped line item inputs and a
//! storage double whose writes always fail.

#![cfg_attr(not(test), forbid(unsafe_code))]

use async_trait::async_trait;
use pocket_market_cart::{Storage, StorageError};
use pocket_market_core::{LineItemInput, ProductId};
use rust_decimal::Decimal;

/// Initialize tracing for a test run, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a candidate line item the way catalog code would.
#[must_use]
pub fn catalog_item(id: &str, title: &str, price_cents: i64) -> LineItemInput {
    LineItemInput {
        id: ProductId::new(id),
        title: title.to_string(),
        image_url: format!("https://img.example/{id}.jpg"),
        price: Decimal::new(price_cents, 2),
    }
}

/// A storage backend whose reads succeed (empty) and whose writes fail.
///
/// Used to assert the write-failure policy: the error is surfaced and the
/// in-memory cart keeps the mutation.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}
