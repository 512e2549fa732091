//! Cart line items and the cart aggregate
//!
//! A [`Cart`] holds at most one [`CartLineItem`] per product, in insertion
//! order, and never holds a line with quantity zero. Only the store mutates it.

use cafe_catalog::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One cart entry: a product snapshot and its quantity
///
/// The display fields are copied from the catalog when the line is created
/// and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product ID
    pub id: ProductId,
    /// Product name at time of adding
    pub name: String,
    /// Unit price at time of adding
    pub price: u32,
    /// Image URL at time of adding
    #[serde(default)]
    pub image: String,
    /// Series at time of adding
    #[serde(default)]
    pub series: String,
    /// Quantity, always at least 1 inside a cart
    pub quantity: u32,
}

impl CartLineItem {
    /// Snapshot a product's display fields into a new line with quantity 1
    #[must_use]
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            series: product.series.clone(),
            quantity: 1,
        }
    }

    /// Price times quantity
    #[inline]
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// Outcome of a quantity change on an existing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// Line kept with the new quantity
    Updated(u32),
    /// Quantity dropped to zero or below, line removed
    Removed,
}

/// The cart aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Find line for product
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct lines
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price times quantity over all lines
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Sum of quantities over all lines
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Serialize as the JSON array kept in session storage
    ///
    /// # Errors
    /// Returns the serializer error (not expected for well-formed items)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Parse the JSON array kept in session storage
    ///
    /// # Errors
    /// Returns the parse error for anything that is not an array of line items
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Increment the product's line, or append a snapshot line
    ///
    /// Returns the line's new quantity.
    pub(crate) fn add_snapshot(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }
        self.items.push(CartLineItem::snapshot(product));
        1
    }

    /// Apply delta to the product's line; `None` when there is no line
    pub(crate) fn change_quantity(&mut self, id: ProductId, delta: i64) -> Option<LineChange> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        let next = i64::from(self.items[pos].quantity).saturating_add(delta);

        if next <= 0 {
            self.items.remove(pos);
            return Some(LineChange::Removed);
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.items[pos].quantity = quantity;
        Some(LineChange::Updated(quantity))
    }

    /// Remove the product's line; returns whether a line was removed
    pub(crate) fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

/// Normalizes stored data: zero-quantity lines are dropped and repeated
/// product ids fold into their first line.
impl From<Vec<CartLineItem>> for Cart {
    fn from(raw: Vec<CartLineItem>) -> Self {
        let mut items: Vec<CartLineItem> = Vec::with_capacity(raw.len());
        for item in raw {
            if item.quantity == 0 {
                continue;
            }
            match items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => items.push(item),
            }
        }
        Self { items }
    }
}

impl From<Cart> for Vec<CartLineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
