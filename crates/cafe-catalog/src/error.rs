//! Catalog definition errors

use crate::product::ProductId;

/// Invalid catalog definition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Product id 0 is reserved
    #[error("product id must be positive")]
    InvalidProductId,

    /// Two products share an id
    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Product price is zero
    #[error("product {0} has no price")]
    InvalidPrice(ProductId),

    /// Testimonial rating outside 1..=5
    #[error("testimonial {id} has rating {rating}, expected 1..=5")]
    InvalidRating { id: u32, rating: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::DuplicateProductId(ProductId(3));
        assert_eq!(err.to_string(), "duplicate product id: 3");
    }
}
