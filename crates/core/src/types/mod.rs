//! Cart data model types.

mod id;
mod line_item;

pub use id::ProductId;
pub use line_item::{LineItem, LineItemInput};
