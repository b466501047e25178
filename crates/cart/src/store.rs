//! The persisted cart store.
//!
//! `CartStore` applies each mutation to the in-memory cart first, then
//! awaits the durable write and returns its result. Callers observe the new
//! cart state immediately; durability trails by one await. A write failure
//! keeps the in-memory mutation (the user's intent) and surfaces the error.

use pocket_market_core::{Cart, LineItem, LineItemInput, ProductId};
use tracing::{debug, instrument, warn};

use crate::config::CartConfig;
use crate::error::CartError;
use crate::storage::Storage;

/// The cart for one session, mirrored to a durable record.
///
/// Construct one at startup, call [`restore`](Self::restore) once, then hand
/// it to whichever components need it.
pub struct CartStore<S> {
    storage: S,
    key: String,
    cart: Cart,
}

impl<S: Storage> CartStore<S> {
    /// Create a store with an empty cart.
    pub fn new(storage: S, config: &CartConfig) -> Self {
        Self {
            storage,
            key: config.storage_key(),
            cart: Cart::new(),
        }
    }

    /// Load the durable record into memory, replacing the current cart.
    ///
    /// An absent record leaves the cart empty. Runs once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Parse`] if a record exists but is malformed; the
    /// in-memory cart is left unchanged so the caller can decide whether to
    /// start empty or abort.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn restore(&mut self) -> Result<(), CartError> {
        let Some(record) = self.storage.get(&self.key).await? else {
            debug!("no persisted cart record");
            return Ok(());
        };

        let cart: Cart = serde_json::from_str(&record).map_err(CartError::Parse)?;
        debug!(lines = cart.len(), "restored cart");
        self.cart = cart;
        Ok(())
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Total units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }

    /// Add a candidate item to the cart.
    ///
    /// An existing line with the same product ID gains quantity 1 and keeps
    /// its stored fields; otherwise the candidate is appended with
    /// quantity 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the durable write fails. The in-memory cart keeps
    /// the mutation either way.
    #[instrument(skip(self, input), fields(product_id = %input.id))]
    pub async fn add_to_cart(&mut self, input: LineItemInput) -> Result<(), CartError> {
        self.cart = self.cart.with_added(&input);
        self.persist().await
    }

    /// Increase the quantity of the line with `id` by 1.
    ///
    /// Silently does nothing when no line matches; the durable record is not
    /// rewritten in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the durable write fails.
    #[instrument(skip(self))]
    pub async fn increment(&mut self, id: &ProductId) -> Result<(), CartError> {
        let Some(cart) = self.cart.with_incremented(id) else {
            debug!("no matching line, skipping write");
            return Ok(());
        };
        self.cart = cart;
        self.persist().await
    }

    /// Decrease the quantity of the line with `id` by 1, removing the line
    /// when its quantity is exactly 1.
    ///
    /// Silently does nothing when no line matches; the durable record is not
    /// rewritten in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the durable write fails.
    #[instrument(skip(self))]
    pub async fn decrement(&mut self, id: &ProductId) -> Result<(), CartError> {
        let Some(cart) = self.cart.with_decremented(id) else {
            debug!("no matching line, skipping write");
            return Ok(());
        };
        self.cart = cart;
        self.persist().await
    }

    /// Write the whole in-memory cart to the durable record.
    async fn persist(&self) -> Result<(), CartError> {
        let record = serde_json::to_string(&self.cart).map_err(CartError::Serialize)?;
        if let Err(err) = self.storage.set(&self.key, record).await {
            warn!(error = %err, "cart write failed, in-memory state retained");
            return Err(err.into());
        }
        Ok(())
    }
}
