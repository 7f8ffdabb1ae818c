//! Cart notification events.

use serde::{Deserialize, Serialize};

/// A notification emitted by a cart operation for the UI layer.
///
/// Notices are not cart state; the cart hands them to the caller and
/// forgets them. The presentation layer decides how to show them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CartNotice {
    /// A product was added as a new line item.
    Added { name: String },
    /// An existing line item's quantity went up by one.
    QuantityIncreased { name: String },
    /// A line item was removed.
    Removed { name: String },
    /// The whole cart was emptied.
    Cleared,
}

impl CartNotice {
    /// Short headline for a toast.
    pub fn title(&self) -> &'static str {
        match self {
            CartNotice::Added { .. } => "Added to cart",
            CartNotice::QuantityIncreased { .. } => "Updated cart",
            CartNotice::Removed { .. } => "Removed from cart",
            CartNotice::Cleared => "Cart cleared",
        }
    }

    /// Longer toast body naming the product involved.
    pub fn description(&self) -> String {
        match self {
            CartNotice::Added { name } => {
                format!("{name} has been added to your cart")
            }
            CartNotice::QuantityIncreased { name } => format!("{name} quantity increased"),
            CartNotice::Removed { name } => {
                format!("{name} has been removed from your cart")
            }
            CartNotice::Cleared => "All items have been removed from your cart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_copy() {
        let notice = CartNotice::Added {
            name: "Garam Masala Blend".to_string(),
        };
        assert_eq!(notice.title(), "Added to cart");
        assert_eq!(
            notice.description(),
            "Garam Masala Blend has been added to your cart"
        );
    }

    #[test]
    fn test_quantity_increased_copy() {
        let notice = CartNotice::QuantityIncreased {
            name: "Organic Turmeric Powder".to_string(),
        };
        assert_eq!(notice.title(), "Updated cart");
        assert_eq!(
            notice.description(),
            "Organic Turmeric Powder quantity increased"
        );
    }

    #[test]
    fn test_cleared_copy() {
        assert_eq!(CartNotice::Cleared.title(), "Cart cleared");
    }
}
