//! Storefront domain types and logic for the Masala spice shop.
//!
//! This crate is the logical core behind the shop UI:
//!
//! - **Catalog**: a fixed product table with read-only queries
//!   (by category, by id, featured picks)
//! - **Browse**: sort options for the shop listing
//! - **Cart**: session-scoped line items with totals and UI notices
//! - **Summary**: delivery fee rules and the order total
//!
//! # Example
//!
//! ```rust
//! use masala_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let turmeric = catalog.by_id("2").unwrap();
//!
//! let mut cart = Cart::new("session-123");
//! let notice = cart.add_item(turmeric.snapshot());
//! assert_eq!(notice.title(), "Added to cart");
//!
//! cart.add_item(turmeric.snapshot());
//! assert_eq!(cart.total_items(), 2);
//!
//! let summary = OrderSummary::for_cart(&cart);
//! println!("Total: {}", summary.total);
//! ```

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{category_menu, Catalog, Category, Product, ALL_CATEGORIES};

    // Browse
    pub use crate::browse::{sorted, SortOption};

    // Cart
    pub use crate::cart::{
        Cart, CartNotice, ItemSnapshot, LineItem, OrderSummary, DELIVERY_FEE,
        FREE_DELIVERY_THRESHOLD,
    };
}
