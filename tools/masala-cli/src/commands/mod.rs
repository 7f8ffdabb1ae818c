//! CLI command implementations.

pub mod featured;
pub mod quote;
pub mod shop;
pub mod show;

pub use featured::FeaturedArgs;
pub use quote::QuoteArgs;
pub use shop::ShopArgs;
pub use show::ShowArgs;
