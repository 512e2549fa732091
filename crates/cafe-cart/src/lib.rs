//! Café Théâtre Cart
//!
//! Session-scoped shopping cart:
//! - [`CartStore`]: sole owner and mutator of the cart
//! - [`SessionStorage`]: where the cart is mirrored as JSON under `"cart"`
//! - [`CartObserver`]: re-render hook invoked after every change
//! - [`CartAction`]: user actions routed back from rendered controls
//!
//! # Example
//!
//! ```rust
//! use cafe_cart::CartStore;
//! use cafe_catalog::{Catalog, ProductId};
//! use std::sync::Arc;
//!
//! let mut store = CartStore::in_memory(Arc::new(Catalog::builtin().clone()));
//! store.add_item(ProductId(1));
//! store.add_item(ProductId(1));
//! store.add_item(ProductId(2));
//!
//! assert_eq!(store.items().len(), 2);
//! assert_eq!(store.item_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod action;
mod error;
mod item;
mod observer;
mod storage;
mod store;

// Re-exports
pub use action::CartAction;
pub use error::{ActionError, StorageError};
pub use item::{Cart, CartLineItem, LineChange};
pub use observer::{CartObserver, ObserverId};
pub use storage::{MemoryStorage, SessionStorage, CART_STORAGE_KEY};
pub use store::CartStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
