//! Money type for representing monetary values.
//!
//! Amounts are stored as integers in the store's display unit (whole
//! rupees for the built-in catalog). The storefront does no currency
//! conversion or sub-unit rounding, so no decimal handling is needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the store's display unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a rupee amount (the built-in catalog's currency).
    pub fn inr(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Format as a display string (e.g., "₹2499").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.amount)
    }

    /// Try to add another Money value, returning None if currencies don't match.
    ///
    /// Saturates on overflow so cart aggregates stay total.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.saturating_add(other.amount),
            self.currency,
        ))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.saturating_sub(other.amount),
            self.currency,
        ))
    }

    /// Multiply by a scalar, saturating on overflow.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values in a single currency.
    ///
    /// Values in a different currency are ignored; the storefront carts
    /// are single-currency by construction.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| {
            acc.try_add(m).unwrap_or(acc)
        })
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_subtract` for fallible subtraction.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        let m = Money::inr(2499);
        assert_eq!(m.display(), "\u{20b9}2499");

        let m = Money::new(100, Currency::USD);
        assert_eq!(m.display(), "$100");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::inr(1000);
        let b = Money::inr(500);
        let c = a + b;
        assert_eq!(c.amount, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::inr(2999);
        let b = Money::inr(2499);
        assert_eq!((a - b).amount, 500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::inr(149);
        assert_eq!(m.multiply(2).amount, 298);
        assert_eq!((m * 3).amount, 447);
    }

    #[test]
    fn test_money_multiply_saturates() {
        let m = Money::inr(i64::MAX);
        assert_eq!(m.multiply(2).amount, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::inr(100), Money::inr(250)];
        let total = Money::sum(values.iter(), Currency::INR);
        assert_eq!(total.amount, 350);
    }

    #[test]
    fn test_money_sum_empty() {
        let total = Money::sum(std::iter::empty(), Currency::INR);
        assert!(total.is_zero());
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let inr = Money::inr(100);
        let usd = Money::new(100, Currency::USD);
        assert_eq!(inr.try_add(&usd), None);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch_panics() {
        let inr = Money::inr(100);
        let usd = Money::new(100, Currency::USD);
        let _ = inr + usd;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
