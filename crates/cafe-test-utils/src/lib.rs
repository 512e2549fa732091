//! Testing utilities for the Café Théâtre workspace
//!
//! Shared fixtures: catalog handle, recording observer and submitter, a
//! form that passes validation.

#![allow(missing_docs)]

use async_trait::async_trait;
use cafe_cart::{Cart, CartObserver};
use cafe_catalog::Catalog;
use cafe_order::{OrderError, OrderForm, OrderPayload, OrderReceipt, OrderSubmitter};
use parking_lot::Mutex;
use std::sync::Arc;

pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().clone())
}

/// Form with every required field valid and no email
pub fn valid_form() -> OrderForm {
    OrderForm::new()
        .with_name("王小明")
        .with_phone("0912345678")
        .with_store("台北信義店")
}

/// Observer that keeps every cart it is shown
///
/// Clones share the same log, so keep one and subscribe the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    seen: Arc<Mutex<Vec<Cart>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<Cart> {
        self.seen.lock().clone()
    }

    pub fn last(&self) -> Option<Cart> {
        self.seen.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().len()
    }
}

impl CartObserver for RecordingObserver {
    fn cart_changed(&mut self, cart: &Cart) {
        self.seen.lock().push(cart.clone());
    }
}

/// Submitter that keeps every payload, optionally failing instead
#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    payloads: Arc<Mutex<Vec<OrderPayload>>>,
    failure: Option<String>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            payloads: Arc::default(),
            failure: Some(message.into()),
        }
    }

    pub fn payloads(&self) -> Vec<OrderPayload> {
        self.payloads.lock().clone()
    }
}

#[async_trait]
impl OrderSubmitter for RecordingSubmitter {
    async fn submit(&self, payload: &OrderPayload) -> Result<OrderReceipt, OrderError> {
        self.payloads.lock().push(payload.clone());
        match &self.failure {
            Some(msg) => Err(OrderError::Submission(msg.clone())),
            None => Ok(OrderReceipt::from(payload)),
        }
    }
}
