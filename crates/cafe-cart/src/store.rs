//! Cart store
//!
//! The single owner and mutator of the session's cart. Every change is
//! mirrored to session storage and then pushed to all observers.

use crate::action::CartAction;
use crate::error::StorageError;
use crate::item::{Cart, CartLineItem, LineChange};
use crate::observer::{CartObserver, ObserverId};
use crate::storage::{MemoryStorage, SessionStorage, CART_STORAGE_KEY};
use cafe_catalog::{Catalog, ProductId};
use std::fmt;
use std::sync::Arc;

/// Session cart store
///
/// # Persistence
/// Each mutation writes the whole cart under [`CART_STORAGE_KEY`]. A failed
/// write is logged and the in-memory cart stays authoritative.
pub struct CartStore<S = MemoryStorage> {
    catalog: Arc<Catalog>,
    storage: S,
    cart: Cart,
    observers: Vec<(ObserverId, Box<dyn CartObserver>)>,
    next_observer: usize,
}

impl<S: SessionStorage> CartStore<S> {
    /// Open the store, rehydrating from session storage
    ///
    /// A missing or unreadable stored cart yields an empty cart.
    pub fn open(catalog: Arc<Catalog>, storage: S) -> Self {
        let cart = match storage.get_item(CART_STORAGE_KEY) {
            None => Cart::new(),
            Some(json) => match Cart::from_json(&json) {
                Ok(cart) => {
                    tracing::debug!(lines = cart.len(), "rehydrated cart from session storage");
                    cart
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable stored cart");
                    Cart::new()
                }
            },
        };

        Self {
            catalog,
            storage,
            cart,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Add one unit of a product
    ///
    /// Unknown product ids are ignored.
    pub fn add_item(&mut self, id: ProductId) {
        let Some(product) = self.catalog.find_by_id(id) else {
            tracing::debug!(product_id = %id, "ignoring add for unknown product");
            return;
        };

        let quantity = self.cart.add_snapshot(product);
        tracing::debug!(product_id = %id, quantity, "added to cart");
        self.commit();
    }

    /// Adjust a line's quantity; the line is removed when it drops to zero
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) {
        match self.cart.change_quantity(id, delta) {
            None => {
                tracing::debug!(product_id = %id, "no cart line to change");
            }
            Some(LineChange::Updated(quantity)) => {
                tracing::debug!(product_id = %id, delta, quantity, "changed quantity");
                self.commit();
            }
            Some(LineChange::Removed) => {
                tracing::debug!(product_id = %id, delta, "quantity reached zero, line removed");
                self.commit();
            }
        }
    }

    /// Remove a product's line if present
    pub fn remove_item(&mut self, id: ProductId) {
        if self.cart.remove(id) {
            tracing::debug!(product_id = %id, "removed from cart");
            self.commit();
        }
    }

    /// Empty the cart
    ///
    /// Always persists and notifies, even when already empty.
    pub fn clear(&mut self) {
        self.cart.clear();
        tracing::debug!("cart cleared");
        self.commit();
    }

    /// Route a user action to the matching operation
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::Add(id) => self.add_item(id),
            CartAction::ChangeQuantity { id, delta } => self.change_quantity(id, delta),
            CartAction::Remove(id) => self.remove_item(id),
            CartAction::Clear => self.clear(),
        }
    }

    /// Current line items, in insertion order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    /// Current cart
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of price times quantity
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    /// Sum of quantities
    #[inline]
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Catalog used to resolve product ids
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register an observer; it renders the current cart immediately
    pub fn subscribe(&mut self, mut observer: Box<dyn CartObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        observer.cart_changed(&self.cart);
        self.observers.push((id, observer));
        id
    }

    /// Drop an observer; returns whether it was registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Number of registered observers
    #[inline]
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Underlying session storage
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Close the store and hand back its storage
    ///
    /// Opening a new store on the returned storage behaves like a page
    /// reload within the same session.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self) {
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "failed to persist cart, keeping in-memory state");
        }
        self.notify();
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = self.cart.to_json()?;
        self.storage.set_item(CART_STORAGE_KEY, json)
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer.cart_changed(&self.cart);
        }
    }
}

impl CartStore<MemoryStorage> {
    /// Open with fresh in-memory storage
    #[must_use]
    pub fn in_memory(catalog: Arc<Catalog>) -> Self {
        Self::open(catalog, MemoryStorage::new())
    }
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("storage", &self.storage)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CartStore {
        CartStore::in_memory(Arc::new(Catalog::builtin().clone()))
    }

    struct Counter(std::rc::Rc<std::cell::Cell<usize>>);

    impl CartObserver for Counter {
        fn cart_changed(&mut self, _cart: &Cart) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn add_twice_then_another() {
        let mut store = store();
        store.add_item(ProductId(1));
        store.add_item(ProductId(1));
        store.add_item(ProductId(2));

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.cart().get(ProductId(1)).unwrap().quantity, 2);
        assert_eq!(store.cart().get(ProductId(2)).unwrap().quantity, 1);
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.total(), 2 * 420 + 360);
    }

    #[test]
    fn unknown_product_is_ignored() {
        let mut store = store();
        store.add_item(ProductId(999));
        assert!(store.items().is_empty());
        assert!(store.storage().get_item(CART_STORAGE_KEY).is_none());
    }

    #[test]
    fn large_negative_delta_removes_line() {
        let mut store = store();
        store.add_item(ProductId(1));
        store.add_item(ProductId(1));
        store.change_quantity(ProductId(1), -5);
        assert!(store.cart().get(ProductId(1)).is_none());
        assert!(store.items().is_empty());
    }

    #[test]
    fn mutations_persist_whole_cart() {
        let mut store = store();
        store.add_item(ProductId(3));
        let stored = store.storage().get_item(CART_STORAGE_KEY).unwrap();
        assert_eq!(Cart::from_json(&stored).unwrap(), *store.cart());

        store.clear();
        assert_eq!(store.storage().get_item(CART_STORAGE_KEY).as_deref(), Some("[]"));
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn observers_see_every_change() {
        let count = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut store = store();
        store.subscribe(Box::new(Counter(count.clone())));
        assert_eq!(count.get(), 1); // initial render

        store.add_item(ProductId(1));
        store.change_quantity(ProductId(1), 1);
        store.remove_item(ProductId(1));
        assert_eq!(count.get(), 4);

        // No-ops do not notify
        store.add_item(ProductId(999));
        store.remove_item(ProductId(1));
        store.change_quantity(ProductId(1), 1);
        assert_eq!(count.get(), 4);

        store.clear();
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut store = store();
        let id = store.subscribe(Box::new(Counter(count.clone())));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_item(ProductId(1));
        assert_eq!(count.get(), 1);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn dispatch_routes_actions() {
        let mut store = store();
        store.dispatch(CartAction::Add(ProductId(4)));
        store.dispatch(CartAction::ChangeQuantity {
            id: ProductId(4),
            delta: 2,
        });
        assert_eq!(store.item_count(), 3);
        store.dispatch(CartAction::Remove(ProductId(4)));
        assert!(store.items().is_empty());
    }
}
