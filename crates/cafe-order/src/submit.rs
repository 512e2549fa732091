//! Order payload and submission seam

use crate::error::OrderError;
use crate::form::OrderForm;
use async_trait::async_trait;
use cafe_cart::{Cart, CartLineItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use ulid::Ulid;

/// Unique order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Ulid);

impl OrderId {
    /// Fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything handed to the submitter for one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Order id
    pub order_id: OrderId,
    /// Customer name
    pub name: String,
    /// Mobile number
    pub phone: String,
    /// Contact email; empty when not given
    pub email: String,
    /// Pickup store
    pub store: String,
    /// Customer note; empty when not given
    pub note: String,
    /// Cart lines at submission time
    pub cart: Vec<CartLineItem>,
    /// Cart total in NT$
    pub total: u64,
    /// Submission time, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
}

impl OrderPayload {
    /// Build from the form (trimmed) and the current cart
    #[must_use]
    pub fn build(form: &OrderForm, cart: &Cart) -> Self {
        let form = form.trimmed();
        Self {
            order_id: OrderId::generate(),
            name: form.name,
            phone: form.phone,
            email: form.email,
            store: form.store,
            note: form.note,
            cart: cart.items().to_vec(),
            total: cart.total(),
            timestamp: Utc::now(),
        }
    }

    /// Total quantity ordered
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// Acknowledgement of an accepted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Order id
    pub order_id: OrderId,
    /// Cart total in NT$
    pub total: u64,
    /// Total quantity
    pub item_count: u64,
    /// Submission time
    pub submitted_at: DateTime<Utc>,
}

impl From<&OrderPayload> for OrderReceipt {
    fn from(payload: &OrderPayload) -> Self {
        Self {
            order_id: payload.order_id,
            total: payload.total,
            item_count: payload.item_count(),
            submitted_at: payload.timestamp,
        }
    }
}

/// Where accepted orders go
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Hand off one order
    async fn submit(&self, payload: &OrderPayload) -> Result<OrderReceipt, OrderError>;
}

/// Submitter that only logs the payload
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmitter;

#[async_trait]
impl OrderSubmitter for LoggingSubmitter {
    async fn submit(&self, payload: &OrderPayload) -> Result<OrderReceipt, OrderError> {
        let json = serde_json::to_string(payload).map_err(|e| OrderError::Submission(e.to_string()))?;
        info!(order_id = %payload.order_id, total = payload.total, payload = %json, "Order received");
        Ok(OrderReceipt::from(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_catalog::{Catalog, ProductId};

    fn cart() -> Cart {
        let catalog = Catalog::builtin();
        let mut a = CartLineItem::snapshot(catalog.find_by_id(ProductId(1)).unwrap());
        a.quantity = 2;
        let b = CartLineItem::snapshot(catalog.find_by_id(ProductId(3)).unwrap());
        Cart::from(vec![a, b])
    }

    #[test]
    fn payload_snapshots_form_and_cart() {
        let form = OrderForm::new()
            .with_name(" 王小明 ")
            .with_phone("0912345678")
            .with_store("台北信義店");
        let cart = cart();
        let payload = OrderPayload::build(&form, &cart);
        assert_eq!(payload.name, "王小明");
        assert_eq!(payload.cart.len(), 2);
        assert_eq!(payload.total, cart.total());
        assert_eq!(payload.item_count(), 3);
    }

    #[test]
    fn payload_json_uses_rfc3339_timestamp() {
        let payload = OrderPayload::build(&OrderForm::new(), &cart());
        let value = serde_json::to_value(&payload).unwrap();
        let ts = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
        assert_eq!(value["cart"][0]["quantity"], 2);
    }

    #[test]
    fn order_ids_are_unique() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }
}
