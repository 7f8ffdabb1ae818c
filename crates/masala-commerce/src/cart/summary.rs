//! Order summary: subtotal, delivery fee, final total.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Subtotal at or above this gets free delivery.
pub const FREE_DELIVERY_THRESHOLD: i64 = 500;

/// Flat delivery surcharge below the threshold, in the price unit.
pub const DELIVERY_FEE: i64 = 50;

/// Pricing breakdown shown on the cart page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Delivery fee; zero at or above the free-delivery threshold.
    pub delivery_fee: Money,
    /// Final total (subtotal + delivery fee).
    pub total: Money,
}

impl OrderSummary {
    /// Compute the summary for a cart.
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.total_price();
        let currency = subtotal.currency;
        let delivery_fee = if subtotal.amount >= FREE_DELIVERY_THRESHOLD {
            Money::zero(currency)
        } else {
            Money::new(DELIVERY_FEE, currency)
        };
        Self {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    /// Whether delivery is free for this order.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }

    /// Amount still needed to reach free delivery, if any.
    ///
    /// Drives the "Add ₹X more for free delivery" hint.
    pub fn remaining_for_free_delivery(&self) -> Option<Money> {
        if self.subtotal.amount < FREE_DELIVERY_THRESHOLD {
            Some(Money::new(
                FREE_DELIVERY_THRESHOLD - self.subtotal.amount,
                self.subtotal.currency,
            ))
        } else {
            None
        }
    }
}
