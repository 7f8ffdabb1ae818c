//! Sort options for the shop listing.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort options offered on the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by name A-Z (default).
    #[default]
    Name,
    /// Sort by price, low to high.
    PriceLowToHigh,
    /// Sort by price, high to low.
    PriceHighToLow,
    /// Sort by rating, best first.
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Name => "name",
            SortOption::PriceLowToHigh => "price-low",
            SortOption::PriceHighToLow => "price-high",
            SortOption::Rating => "rating",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(SortOption::Name),
            "price-low" => Some(SortOption::PriceLowToHigh),
            "price-high" => Some(SortOption::PriceHighToLow),
            "rating" => Some(SortOption::Rating),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Name => "Name",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::Rating => "Rating",
        }
    }
}

/// Return the products re-ordered by the given sort option.
///
/// The sort is stable, so products that compare equal keep catalog order.
pub fn sorted<'a>(products: &[&'a Product], sort: SortOption) -> Vec<&'a Product> {
    let mut out = products.to_vec();
    match sort {
        SortOption::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOption::PriceLowToHigh => out.sort_by_key(|p| p.price.amount),
        SortOption::PriceHighToLow => out.sort_by_key(|p| std::cmp::Reverse(p.price.amount)),
        SortOption::Rating => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_sort_option_round_trip() {
        for sort in [
            SortOption::Name,
            SortOption::PriceLowToHigh,
            SortOption::PriceHighToLow,
            SortOption::Rating,
        ] {
            assert_eq!(SortOption::from_str(sort.as_str()), Some(sort));
        }
        assert_eq!(SortOption::from_str("popularity"), None);
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = Catalog::builtin();
        let all: Vec<&Product> = catalog.all().iter().collect();

        let cheap_first = sorted(&all, SortOption::PriceLowToHigh);
        let prices: Vec<i64> = cheap_first.iter().map(|p| p.price.amount).collect();
        assert_eq!(prices, [149, 249, 299, 2499]);

        let expensive_first = sorted(&all, SortOption::PriceHighToLow);
        assert_eq!(expensive_first[0].price.amount, 2499);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let catalog = Catalog::builtin();
        let all: Vec<&Product> = catalog.all().iter().collect();

        let rated = sorted(&all, SortOption::Rating);
        let ratings: Vec<f64> = rated.iter().map(|p| p.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_by_name() {
        let catalog = Catalog::builtin();
        let all: Vec<&Product> = catalog.all().iter().collect();

        let named = sorted(&all, SortOption::Name);
        let names: Vec<&str> = named.iter().map(|p| p.name.as_str()).collect();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
    }
}
