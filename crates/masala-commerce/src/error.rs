//! Storefront error types.

use thiserror::Error;

/// Errors that can occur when assembling the product catalog.
///
/// Catalog queries and cart operations are total; the only fallible
/// surface is validating a product set at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Rating outside the 0-5 scale.
    #[error("Rating {rating} out of range for product {id} (expected 0-5)")]
    RatingOutOfRange { id: String, rating: f64 },

    /// Negative price or original price.
    #[error("Negative price for product {0}")]
    NegativePrice(String),

    /// Negative review count.
    #[error("Negative review count for product {0}")]
    NegativeReviews(String),
}
