//! Product catalog module.
//!
//! Contains the product and category types plus the read-only catalog
//! queries the shop pages are built on.

mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, FEATURED_LIMIT};
pub use category::{category_menu, Category, ALL_CATEGORIES};
pub use product::Product;
