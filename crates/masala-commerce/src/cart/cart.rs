//! Cart and line item types.

use crate::cart::CartNotice;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// The product fields captured when an item is added to the cart.
///
/// The cart never re-reads the catalog; whatever is in the snapshot at
/// add time is what the line item keeps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemSnapshot {
    /// Product identifier.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    /// Image URL at add time.
    pub image: String,
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier (at most one line item per id).
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    fn from_snapshot(snapshot: ItemSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            price: snapshot.price,
            image: snapshot.image,
            quantity: 1,
        }
    }

    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// A session-scoped shopping cart.
///
/// Created empty at session start and discarded with the session; there
/// is no persistence. Every operation is synchronous and total: unknown
/// ids are no-ops, never errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Session this cart belongs to.
    pub session_id: String,
    /// Items in insertion order, at most one per product id.
    items: Vec<LineItem>,
}

impl Cart {
    /// Create a new empty cart for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
        }
    }

    /// Add an item to the cart.
    ///
    /// If a line item with the same id exists, its quantity is bumped by
    /// one and the existing snapshot fields are kept. Otherwise the
    /// snapshot becomes a new line item with quantity 1 at the end of the
    /// cart. The returned notice tells the UI which of the two happened.
    pub fn add_item(&mut self, snapshot: ItemSnapshot) -> CartNotice {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == snapshot.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(1)
                .min(MAX_QUANTITY_PER_ITEM);
            return CartNotice::QuantityIncreased {
                name: snapshot.name,
            };
        }

        let name = snapshot.name.clone();
        self.items.push(LineItem::from_snapshot(snapshot));
        CartNotice::Added { name }
    }

    /// Remove the line item with the given id.
    ///
    /// Returns the notice for the UI, or None if the id was not in the
    /// cart (a no-op, not an error).
    pub fn remove_item(&mut self, id: &ProductId) -> Option<CartNotice> {
        let position = self.items.iter().position(|i| &i.id == id)?;
        let removed = self.items.remove(position);
        Some(CartNotice::Removed { name: removed.name })
    }

    /// Set the quantity of the line item with the given id.
    ///
    /// A quantity of zero or less removes the item. Setting a quantity
    /// for an id not in the cart is a no-op and never creates an entry.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Option<CartNotice> {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
        }
        None
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartNotice {
        self.items.clear();
        CartNotice::Cleared
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total price across all line items.
    pub fn total_price(&self) -> Money {
        let subtotals: Vec<Money> = self.items.iter().map(|i| i.subtotal()).collect();
        Money::sum(subtotals.iter(), self.currency())
    }

    /// Number of distinct line items.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Currency of the cart's contents (INR for an empty cart).
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.price.currency)
            .unwrap_or_default()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("anonymous")
    }
}
