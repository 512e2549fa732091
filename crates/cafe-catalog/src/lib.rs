//! Café Théâtre Catalog
//!
//! The shop's static content: products, FAQ entries and testimonials.
//!
//! # Example
//!
//! ```rust
//! use cafe_catalog::{Catalog, ProductId};
//!
//! let catalog = Catalog::builtin();
//! let product = catalog.find_by_id(ProductId(2)).unwrap();
//! assert_eq!(product.price, 360);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod content;
mod data;
mod error;
mod product;

// Re-exports
pub use catalog::Catalog;
pub use content::{Faq, Testimonial, MAX_RATING};
pub use error::CatalogError;
pub use product::{Product, ProductId, RoastLevel};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
