//! Session-scoped storage seam
//!
//! Mirrors the browser's session storage: string keys, string values, gone
//! when the session ends.

use crate::error::StorageError;
use std::collections::HashMap;

/// Storage key holding the serialized cart
pub const CART_STORAGE_KEY: &str = "cart";

/// Key-value storage scoped to one session
pub trait SessionStorage {
    /// Read value for key
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write value for key, replacing any previous value
    ///
    /// # Errors
    /// Implementations may refuse the write (e.g. quota)
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Delete key
    fn remove_item(&mut self, key: &str);
}

/// In-process session storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    /// Create empty unbounded storage
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit total key and value bytes
    #[inline]
    #[must_use]
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Seed a value without quota checks
    #[must_use]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Bytes currently used by keys and values
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Number of stored keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if storage is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::quota_exceeded(key, needed, quota));
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
