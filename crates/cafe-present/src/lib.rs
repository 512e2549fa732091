//! Café Théâtre Presenters
//!
//! HTML rendering for the storefront:
//! - Cart surfaces ([`BadgePresenter`], [`SidebarPresenter`],
//!   [`OrderSummaryPresenter`]) mounted on the cart store via [`mount`]
//! - Catalog sections (product grid, product detail, FAQ, testimonials)
//! - [`Theme`]: classic or noir templates over the same state
//!
//! # Example
//!
//! ```rust
//! use cafe_cart::CartStore;
//! use cafe_catalog::{Catalog, ProductId};
//! use cafe_present::{mount, BadgePresenter};
//! use std::sync::Arc;
//!
//! let mut store = CartStore::in_memory(Arc::new(Catalog::builtin().clone()));
//! let (badge, _) = mount(&mut store, BadgePresenter);
//!
//! store.add_item(ProductId(1));
//! assert!(badge.html().contains(">1<"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod cart_view;
mod catalog_view;
mod faq;
pub mod html;
mod surface;
mod theme;

// Re-exports
pub use cart_view::{BadgePresenter, CartPresenter, OrderSummaryPresenter, SidebarPresenter};
pub use catalog_view::{
    render_product_detail, render_product_grid, render_testimonials, CLOSE_MODAL_ACTION,
    MODAL_ADD_ACTION, VIEW_ACTION,
};
pub use faq::{FaqAccordion, TOGGLE_FAQ_ACTION};
pub use surface::{mount, Mounted, Surface};
pub use theme::{AccordionMode, ParseThemeError, Theme};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
