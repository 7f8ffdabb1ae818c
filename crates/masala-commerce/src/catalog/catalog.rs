//! The catalog: a fixed product set with read-only queries.

use crate::catalog::{Category, Product, ALL_CATEGORIES};
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of products surfaced in the featured section.
pub const FEATURED_LIMIT: usize = 4;

/// A read-only product catalog.
///
/// Products keep their insertion order; all queries preserve it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product set, validating its invariants.
    pub fn new(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(StoreError::DuplicateProduct(product.id.to_string()));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(StoreError::RatingOutOfRange {
                    id: product.id.to_string(),
                    rating: product.rating,
                });
            }
            if product.price.is_negative()
                || product.original_price.map_or(false, |p| p.is_negative())
            {
                return Err(StoreError::NegativePrice(product.id.to_string()));
            }
            if product.reviews < 0 {
                return Err(StoreError::NegativeReviews(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The compiled-in spice shop catalog.
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products in the named category, in catalog order.
    ///
    /// The "All" sentinel returns the whole catalog; an unknown name
    /// yields an empty result, not an error.
    pub fn by_category(&self, name: &str) -> Vec<&Product> {
        if name == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        match Category::from_str(name) {
            Some(category) => self
                .products
                .iter()
                .filter(|p| p.category == category)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Promotional picks: best sellers and new arrivals, capped at
    /// [`FEATURED_LIMIT`], in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_featured())
            .take(FEATURED_LIMIT)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The fixed product table the shop ships with.
fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "Premium Kashmiri Saffron",
            Category::PremiumSpices,
            Money::inr(2499),
        )
        .with_original_price(Money::inr(2999))
        .with_image("/assets/saffron.jpg")
        .with_description(
            "Authentic Kashmiri saffron with rich aroma and deep color. \
             Hand-picked from the valleys of Kashmir.",
        )
        .with_origin("Kashmir, India")
        .with_uses(["Biryani", "Sweets", "Milk preparations", "Rice dishes"])
        .with_benefits(["Rich in antioxidants", "Improves mood", "Enhances skin health"])
        .with_weight("1g")
        .with_rating(4.8, 156)
        .best_seller(),
        Product::new(
            "2",
            "Organic Turmeric Powder",
            Category::GroundSpices,
            Money::inr(149),
        )
        .with_original_price(Money::inr(199))
        .with_image("/assets/turmeric.jpg")
        .with_description(
            "Pure organic turmeric powder with high curcumin content. \
             Perfect for daily cooking and health benefits.",
        )
        .with_origin("Kerala, India")
        .with_uses(["Curries", "Dal", "Golden milk", "Face masks"])
        .with_benefits(["Anti-inflammatory", "Boosts immunity", "Good for digestion"])
        .with_weight("500g")
        .with_rating(4.6, 234)
        .new_arrival(),
        Product::new(
            "3",
            "Garam Masala Blend",
            Category::SpiceBlends,
            Money::inr(299),
        )
        .with_image("/assets/garam-masala.jpg")
        .with_description(
            "Traditional garam masala blend with perfect balance of whole spices. \
             Adds warmth and aroma to dishes.",
        )
        .with_origin("Delhi, India")
        .with_uses(["Curries", "Meat dishes", "Vegetables", "Rice preparations"])
        .with_benefits(["Aids digestion", "Warming spice", "Rich in antioxidants"])
        .with_weight("250g")
        .with_rating(4.7, 89)
        .best_seller(),
        Product::new(
            "4",
            "Kashmiri Red Chili Powder",
            Category::GroundSpices,
            Money::inr(249),
        )
        .with_original_price(Money::inr(299))
        .with_image("/assets/chili-powder.jpg")
        .with_description(
            "Mild heat with vibrant red color. Kashmiri chilies are known for \
             their color and moderate spice level.",
        )
        .with_origin("Kashmir, India")
        .with_uses(["Curries", "Tandoor dishes", "Marinades", "Vegetables"])
        .with_benefits(["Rich in Vitamin C", "Boosts metabolism", "Adds natural color"])
        .with_weight("200g")
        .with_rating(4.5, 67),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(Catalog::new(catalog.all().to_vec()).is_ok());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_by_id_round_trip() {
        let catalog = Catalog::builtin();
        for product in catalog.all() {
            let found = catalog.by_id(product.id.as_str());
            assert_eq!(found, Some(product));
        }
    }

    #[test]
    fn test_by_id_unknown() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_id("999"), None);
    }

    #[test]
    fn test_by_category_all_sentinel() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_category(ALL_CATEGORIES).len(), catalog.len());
    }

    #[test]
    fn test_by_category_filters() {
        let catalog = Catalog::builtin();
        let ground = catalog.by_category("Ground Spices");
        assert_eq!(ground.len(), 2);
        assert!(ground.iter().all(|p| p.category == Category::GroundSpices));
        // Catalog order preserved
        assert_eq!(ground[0].id.as_str(), "2");
        assert_eq!(ground[1].id.as_str(), "4");
    }

    #[test]
    fn test_by_category_unknown_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.by_category("Herbs").is_empty());
        assert!(catalog.by_category("Whole Spices").is_empty());
    }

    #[test]
    fn test_featured() {
        let catalog = Catalog::builtin();
        let featured = catalog.featured();
        assert!(featured.len() <= FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.is_best_seller || p.is_new));
        // Catalog order, no ranking
        assert_eq!(featured[0].id.as_str(), "1");
    }

    #[test]
    fn test_featured_truncates() {
        let products = (0..6)
            .map(|i| {
                Product::new(
                    i.to_string(),
                    format!("Spice {i}"),
                    Category::WholeSpices,
                    Money::inr(100),
                )
                .best_seller()
            })
            .collect();
        let catalog = Catalog::new(products).unwrap();
        assert_eq!(catalog.featured().len(), FEATURED_LIMIT);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let products = vec![
            Product::new("1", "A", Category::WholeSpices, Money::inr(10)),
            Product::new("1", "B", Category::WholeSpices, Money::inr(20)),
        ];
        assert_eq!(
            Catalog::new(products),
            Err(StoreError::DuplicateProduct("1".to_string()))
        );
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let products = vec![
            Product::new("1", "A", Category::WholeSpices, Money::inr(10)).with_rating(5.5, 1),
        ];
        assert!(matches!(
            Catalog::new(products),
            Err(StoreError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let products = vec![Product::new("1", "A", Category::WholeSpices, Money::inr(-1))];
        assert_eq!(
            Catalog::new(products),
            Err(StoreError::NegativePrice("1".to_string()))
        );
    }
}
