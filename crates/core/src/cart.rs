//! The ordered cart collection and its pure mutation transformations.
//!
//! Every mutation is a total function from the current cart to a new cart.
//! Nothing here mutates line items in place, so a cart handed out to a
//! reader can never change underneath it.
//!
//! Invariants:
//! - every line item has `quantity >= 1`; a line whose quantity would reach
//!   0 is removed, never retained at 0
//! - product IDs are unique within the cart
//! - insertion order is preserved; the only reordering event is removal

use serde::{Deserialize, Serialize};

use crate::types::{LineItem, LineItemInput, ProductId};

/// An ordered collection of [`LineItem`]s, keyed by product ID.
///
/// Serializes transparently as a JSON array of line items, which is exactly
/// the durable record format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<LineItem>);

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    /// Look up a line item by product ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.0.iter().find(|item| item.id == *id)
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total units across all line items (the cart badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.0.iter().map(|item| item.quantity).sum()
    }

    /// Add a candidate item.
    ///
    /// If a line with the same product ID already exists, its quantity grows
    /// by 1 and its other fields are kept; the candidate's fields are ignored
    /// on merge. Otherwise the candidate is appended with quantity 1.
    #[must_use]
    pub fn with_added(&self, input: &LineItemInput) -> Self {
        if self.get(&input.id).is_some() {
            return Self(bump_quantity(&self.0, &input.id));
        }

        let mut items = self.0.clone();
        items.push(LineItem::from(input.clone()));
        Self(items)
    }

    /// Increase the quantity of the line with `id` by 1.
    ///
    /// Returns `None` when no line matches, leaving the caller to treat the
    /// call as a no-op.
    #[must_use]
    pub fn with_incremented(&self, id: &ProductId) -> Option<Self> {
        self.get(id)?;
        Some(Self(bump_quantity(&self.0, id)))
    }

    /// Decrease the quantity of the line with `id` by 1, removing the line
    /// entirely when its quantity is exactly 1.
    ///
    /// Returns `None` when no line matches.
    #[must_use]
    pub fn with_decremented(&self, id: &ProductId) -> Option<Self> {
        self.get(id)?;
        let items = self
            .0
            .iter()
            .filter_map(|item| {
                if item.id == *id {
                    let quantity = item.quantity.checked_sub(1)?;
                    if quantity == 0 {
                        return None;
                    }
                    return Some(LineItem {
                        quantity,
                        ..item.clone()
                    });
                }
                Some(item.clone())
            })
            .collect();
        Some(Self(items))
    }
}

/// Rebuild the item list with the matching line's quantity raised by 1.
fn bump_quantity(items: &[LineItem], id: &ProductId) -> Vec<LineItem> {
    items
        .iter()
        .map(|item| {
            if item.id == *id {
                LineItem {
                    quantity: item.quantity.saturating_add(1),
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}
