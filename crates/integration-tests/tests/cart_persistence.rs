//! Durability and restore against file storage.
//!
//! These tests drive a store through mutations, drop it, and restore a fresh
//! store from the same directory - the app-restart path.

use pocket_market_cart::{CartConfig, CartError, CartStore, FileStorage, Storage};
use pocket_market_core::ProductId;
use pocket_market_integration_tests::{catalog_item, init_tracing};
use serde_json::Value;

// ============================================================================
// Restore Across Instances
// ============================================================================

#[tokio::test]
async fn test_cart_survives_restart() {
    init_tracing();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = CartConfig::default();

    {
        let mut store = CartStore::new(FileStorage::new(dir.path()), &config);
        store
            .add_to_cart(catalog_item("1", "Shirt", 5000))
            .await
            .unwrap();
        store
            .add_to_cart(catalog_item("2", "Hat", 2500))
            .await
            .unwrap();
        store.increment(&ProductId::new("1")).await.unwrap();
    }

    let mut restored = CartStore::new(FileStorage::new(dir.path()), &config);
    restored.restore().await.unwrap();

    let ids: Vec<_> = restored.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(restored.items()[0].quantity, 2);
    assert_eq!(restored.items()[1].quantity, 1);
    assert_eq!(restored.items()[0].title, "Shirt");
}

#[tokio::test]
async fn test_restore_with_no_prior_record_is_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut store = CartStore::new(FileStorage::new(dir.path()), &CartConfig::default());

    store.restore().await.unwrap();

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_restore_malformed_record_fails_loudly() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = CartConfig::default();
    let storage = FileStorage::new(dir.path());
    storage
        .set(&config.storage_key(), "{not a cart".to_string())
        .await
        .unwrap();

    let mut store = CartStore::new(storage, &config);
    let result = store.restore().await;

    assert!(matches!(result, Err(CartError::Parse(_))));
    assert!(store.is_empty());
}

// ============================================================================
// Durable Record Format
// ============================================================================

#[tokio::test]
async fn test_record_is_an_array_of_line_item_objects() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = CartConfig::default();
    let storage = FileStorage::new(dir.path());

    let mut store = CartStore::new(storage.clone(), &config);
    store
        .add_to_cart(catalog_item("1", "Shirt", 5000))
        .await
        .unwrap();

    let record = storage.get(&config.storage_key()).await.unwrap().unwrap();
    let parsed: Value = serde_json::from_str(&record).unwrap();

    let lines = parsed.as_array().expect("record should be a JSON array");
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert_eq!(line["id"], "1");
    assert_eq!(line["title"], "Shirt");
    assert_eq!(line["image_url"], "https://img.example/1.jpg");
    assert!(line["price"].is_number());
    assert_eq!(line["quantity"], 1);
}

#[tokio::test]
async fn test_namespace_scopes_the_record() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let storage = FileStorage::new(dir.path());

    let acme = CartConfig::new("acme").unwrap();
    let other = CartConfig::new("other").unwrap();

    let mut store = CartStore::new(storage.clone(), &acme);
    store
        .add_to_cart(catalog_item("1", "Shirt", 5000))
        .await
        .unwrap();

    assert!(storage.get(&acme.storage_key()).await.unwrap().is_some());
    assert!(storage.get(&other.storage_key()).await.unwrap().is_none());
}
