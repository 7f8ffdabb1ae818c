//! Shopping cart module.
//!
//! Contains the session-scoped cart, its line items, the notices it
//! emits for the UI, and the order summary rules.

mod cart;
mod notice;
mod summary;

pub use cart::{Cart, ItemSnapshot, LineItem, MAX_QUANTITY_PER_ITEM};
pub use notice::CartNotice;
pub use summary::{OrderSummary, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD};
