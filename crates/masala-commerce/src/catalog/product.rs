//! Product types.

use crate::catalog::Category;
use crate::cart::ItemSnapshot;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; the cart works on
/// snapshots taken via [`Product::snapshot`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Selling price.
    pub price: Money,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<Money>,
    /// Image URL.
    pub image: String,
    /// Category within the fixed shop set.
    pub category: Category,
    /// Full description for the detail page.
    pub description: String,
    /// Region of origin (e.g., "Kashmir, India").
    pub origin: String,
    /// Suggested uses, in display order.
    pub uses: Vec<String>,
    /// Health benefits, in display order.
    pub benefits: Vec<String>,
    /// Pack weight display string (e.g., "500g").
    pub weight: String,
    /// Average rating on a 0-5 scale.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: i64,
    /// Newly added to the catalog.
    #[serde(default)]
    pub is_new: bool,
    /// Flagged as a best seller.
    #[serde(default)]
    pub is_best_seller: bool,
    /// Whether the product can be purchased.
    pub in_stock: bool,
}

impl Product {
    /// Create a new product with display fields left empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            category,
            description: String::new(),
            origin: String::new(),
            uses: Vec::new(),
            benefits: Vec::new(),
            weight: String::new(),
            rating: 0.0,
            reviews: 0,
            is_new: false,
            is_best_seller: false,
            in_stock: true,
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, price: Money) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the region of origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the suggested uses.
    pub fn with_uses<I, S>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uses = uses.into_iter().map(Into::into).collect();
        self
    }

    /// Set the health benefits.
    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pack weight display string.
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: i64) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Flag as newly added.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Flag as a best seller.
    pub fn best_seller(mut self) -> Self {
        self.is_best_seller = true;
        self
    }

    /// Set stock availability.
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Whether the product is surfaced in the featured section.
    pub fn is_featured(&self) -> bool {
        self.is_best_seller || self.is_new
    }

    /// Whether the product has a pre-discount price above its price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.amount > self.price.amount)
            .unwrap_or(false)
    }

    /// Discount percentage for display, rounded to the nearest integer.
    ///
    /// Returns 0 when there is no original price.
    pub fn discount_percent(&self) -> i64 {
        match self.original_price {
            Some(orig) if orig.amount > 0 => {
                let savings = (orig.amount - self.price.amount) as f64;
                (savings / orig.amount as f64 * 100.0).round() as i64
            }
            _ => 0,
        }
    }

    /// Amount saved versus the original price ("Save ₹X" badge).
    ///
    /// Zero when the product is not on sale.
    pub fn savings(&self) -> Money {
        match self.original_price {
            Some(orig) if self.is_on_sale() => orig - self.price,
            _ => Money::zero(self.price.currency),
        }
    }

    /// Snapshot of the fields the cart keeps for a line item.
    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saffron() -> Product {
        Product::new("1", "Premium Kashmiri Saffron", Category::PremiumSpices, Money::inr(2499))
            .with_original_price(Money::inr(2999))
            .with_rating(4.8, 156)
            .best_seller()
    }

    #[test]
    fn test_product_creation() {
        let product = saffron();
        assert_eq!(product.id.as_str(), "1");
        assert!(product.in_stock);
        assert!(product.is_featured());
    }

    #[test]
    fn test_discount_percent() {
        let product = saffron();
        // round((2999 - 2499) / 2999 * 100) = round(16.67) = 17
        assert_eq!(product.discount_percent(), 17);
    }

    #[test]
    fn test_discount_percent_without_original_price() {
        let product = Product::new("3", "Garam Masala", Category::SpiceBlends, Money::inr(299));
        assert_eq!(product.discount_percent(), 0);
        assert!(!product.is_on_sale());
    }

    #[test]
    fn test_savings() {
        let product = saffron();
        assert_eq!(product.savings().amount, 500);

        let plain = Product::new("3", "Garam Masala", Category::SpiceBlends, Money::inr(299));
        assert!(plain.savings().is_zero());
    }

    #[test]
    fn test_snapshot() {
        let product = saffron();
        let snapshot = product.snapshot();
        assert_eq!(snapshot.id, product.id);
        assert_eq!(snapshot.name, product.name);
        assert_eq!(snapshot.price, product.price);
    }
}
