//! Café Théâtre Storefront
//!
//! Ties the catalog, cart store, presenters and order form into one session:
//! - [`Storefront`]: session state and page operations
//! - [`UiEvent`]: clicks decoded from rendered `data-action` attributes
//! - [`StorefrontConfig`]: theme, order timings and storage quota from TOML

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod event;
mod page;
mod storefront;

// Re-exports
pub use config::{OrderConfig, StorageConfig, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use event::{UiEvent, CLOSE_SIDEBAR_ACTION, GO_TO_ORDER_ACTION, TOGGLE_SIDEBAR_ACTION};
pub use storefront::{Storefront, NAV_SCROLL_THRESHOLD};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
