//! Catalog store
//!
//! Read-only, ordered collections of products, FAQs and testimonials.

use crate::content::{Faq, Testimonial, MAX_RATING};
use crate::data;
use crate::error::CatalogError;
use crate::product::{Product, ProductId};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    products: data::products(),
    faqs: data::faqs(),
    testimonials: data::testimonials(),
});

/// Immutable shop catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    faqs: Vec<Faq>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Create catalog from records
    ///
    /// # Errors
    /// - `CatalogError::InvalidProductId` for id 0
    /// - `CatalogError::DuplicateProductId` when two products share an id
    /// - `CatalogError::InvalidPrice` for a zero price
    /// - `CatalogError::InvalidRating` for a rating outside 1..=5
    pub fn new(
        products: Vec<Product>,
        faqs: Vec<Faq>,
        testimonials: Vec<Testimonial>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.get() == 0 {
                return Err(CatalogError::InvalidProductId);
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.price == 0 {
                return Err(CatalogError::InvalidPrice(product.id));
            }
        }

        if let Some(t) = testimonials
            .iter()
            .find(|t| t.rating == 0 || t.rating > MAX_RATING)
        {
            return Err(CatalogError::InvalidRating {
                id: t.id,
                rating: t.rating,
            });
        }

        Ok(Self {
            products,
            faqs,
            testimonials,
        })
    }

    /// The shop's built-in catalog
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Find product by ID
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products of one series, in catalog order
    pub fn by_series<'a>(&'a self, series: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.series == series)
    }

    /// Distinct series names, in order of first appearance
    #[must_use]
    pub fn series(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for product in &self.products {
            if !out.contains(&product.series.as_str()) {
                out.push(&product.series);
            }
        }
        out
    }

    /// FAQ entries
    #[inline]
    #[must_use]
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// Testimonials
    #[inline]
    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Number of products
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if catalog has no products
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
