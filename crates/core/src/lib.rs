//! Pocket Market Core - Shared cart types library.
//!
//! This crate provides the cart data model used by the other Pocket Market
//! components:
//! - `cart` - The persisted cart store and its storage adapters
//!
//! # Architecture
//!
//! The core crate contains only types and pure transformations - no I/O, no
//! storage access, no async. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `ProductId`, `LineItem`, and `LineItemInput`
//! - [`cart`] - The ordered [`Cart`](cart::Cart) collection and its pure
//!   mutation transformations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::Cart;
pub use types::*;
