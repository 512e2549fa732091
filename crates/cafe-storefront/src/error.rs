//! Storefront errors

use cafe_cart::ActionError;
use cafe_order::OrderError;
use thiserror::Error;

/// Storefront errors
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// A rendered control carried an unusable action
    #[error("invalid page action: {0}")]
    Action(#[from] ActionError),

    /// Order form error
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Result type for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;
