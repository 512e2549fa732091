//! Error types for the cart crate

/// Session storage write failures
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Value does not fit in the storage quota
    #[error("storage quota exceeded writing '{key}': {needed} bytes needed, quota {quota}")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Total bytes stored after the write
        needed: usize,
        /// Configured quota in bytes
        quota: usize,
    },

    /// Cart could not be serialized before writing
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    /// Create quota error for key
    pub fn quota_exceeded(key: impl Into<String>, needed: usize, quota: usize) -> Self {
        Self::QuotaExceeded {
            key: key.into(),
            needed,
            quota,
        }
    }
}

/// Errors parsing a user action from rendered attributes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// `data-action` value not recognized
    #[error("unknown cart action: '{0}'")]
    UnknownAction(String),

    /// Action needs a product id but none was given
    #[error("cart action '{0}' requires a product id")]
    MissingId(String),

    /// `data-id` is not a product id
    #[error("invalid product id: '{0}'")]
    InvalidId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_error_display() {
        let err = StorageError::quota_exceeded("cart", 120, 100);
        assert!(err.to_string().contains("quota exceeded"));
        assert!(err.to_string().contains("'cart'"));
    }

    #[test]
    fn quota_error_fields() {
        match StorageError::quota_exceeded("cart", 120, 100) {
            StorageError::QuotaExceeded { key, needed, quota } => {
                assert_eq!(key, "cart");
                assert_eq!(needed, 120);
                assert_eq!(quota, 100);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serde_error_converts() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = StorageError::from(source);
        assert!(matches!(err, StorageError::Serialize(_)));
        assert!(err.to_string().starts_with("serialization failed: "));
    }

    #[test]
    fn action_error_display() {
        let err = ActionError::UnknownAction("explode".to_string());
        assert_eq!(err.to_string(), "unknown cart action: 'explode'");
    }
}
