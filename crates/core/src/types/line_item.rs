//! Cart line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// One product entry in the cart.
///
/// This is also the durable record's element format: the persisted cart is a
/// JSON array of these objects, with `price` stored as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque product identifier, unique within the cart.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price. Carried as stored; the cart does no price arithmetic.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

/// A candidate line item, before it has a quantity.
///
/// This is what callers pass to `add_to_cart`: the store decides whether it
/// becomes a new line with quantity 1 or merges into an existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Opaque product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<LineItemInput> for LineItem {
    /// Promote a candidate into a cart line with quantity 1.
    fn from(input: LineItemInput) -> Self {
        Self {
            id: input.id,
            title: input.title,
            image_url: input.image_url,
            price: input.price,
            quantity: 1,
        }
    }
}
