//! Category types for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category name that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

/// The fixed set of shop categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    GroundSpices,
    WholeSpices,
    SpiceBlends,
    PremiumSpices,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 4] = [
        Category::GroundSpices,
        Category::WholeSpices,
        Category::SpiceBlends,
        Category::PremiumSpices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::GroundSpices => "Ground Spices",
            Category::WholeSpices => "Whole Spices",
            Category::SpiceBlends => "Spice Blends",
            Category::PremiumSpices => "Premium Spices",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Ground Spices" => Some(Category::GroundSpices),
            "Whole Spices" => Some(Category::WholeSpices),
            "Spice Blends" => Some(Category::SpiceBlends),
            "Premium Spices" => Some(Category::PremiumSpices),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category names for filter chips: "All" followed by the fixed set.
pub fn category_menu() -> Vec<&'static str> {
    let mut menu = vec![ALL_CATEGORIES];
    menu.extend(Category::ALL.iter().map(|c| c.as_str()));
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_unknown_category() {
        assert_eq!(Category::from_str("Herbs"), None);
        assert_eq!(Category::from_str(""), None);
    }

    #[test]
    fn test_category_menu() {
        let menu = category_menu();
        assert_eq!(menu[0], ALL_CATEGORIES);
        assert_eq!(menu.len(), 5);
        assert!(menu.contains(&"Spice Blends"));
    }
}
