//! Storefront configuration
//!
//! ```toml
//! theme = "noir"
//!
//! [order]
//! submit_delay_ms = 0
//! success_display_ms = 3000
//!
//! [storage]
//! quota_bytes = 5242880
//! ```
//!
//! Omitted timings fall back to the theme's defaults.

use crate::error::Result;
use cafe_cart::MemoryStorage;
use cafe_order::{Messages, OrderTimings};
use cafe_present::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Storefront configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Visual theme
    pub theme: Theme,
    /// Order form timings
    pub order: OrderConfig,
    /// Session storage limits
    pub storage: StorageConfig,
}

/// Order form timings; `None` means the theme's default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderConfig {
    /// Delay before the order is handed off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_delay_ms: Option<u64>,
    /// How long the success panel is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_display_ms: Option<u64>,
}

/// Session storage limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Maximum stored bytes; unlimited when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_bytes: Option<usize>,
}

impl StorefrontConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `StorefrontError::Io` if the file cannot be read, or
    /// `StorefrontError::Config` if it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    /// Returns `StorefrontError::Config` on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML
    ///
    /// # Errors
    /// Returns `StorefrontError::ConfigSerialize` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Set theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set submit delay
    #[must_use]
    pub fn with_submit_delay_ms(mut self, ms: u64) -> Self {
        self.order.submit_delay_ms = Some(ms);
        self
    }

    /// Set success panel duration
    #[must_use]
    pub fn with_success_display_ms(mut self, ms: u64) -> Self {
        self.order.success_display_ms = Some(ms);
        self
    }

    /// Set storage quota
    #[must_use]
    pub fn with_quota_bytes(mut self, bytes: usize) -> Self {
        self.storage.quota_bytes = Some(bytes);
        self
    }

    /// Effective order timings: theme defaults with configured overrides
    #[must_use]
    pub fn order_timings(&self) -> OrderTimings {
        let mut timings = match self.theme {
            Theme::Classic => OrderTimings::classic(),
            Theme::Noir => OrderTimings::noir(),
        };
        if let Some(ms) = self.order.submit_delay_ms {
            timings.submit_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.order.success_display_ms {
            timings.success_display = Duration::from_millis(ms);
        }
        timings
    }

    /// Inline order-form wording for the theme
    #[must_use]
    pub fn order_messages(&self) -> Messages {
        match self.theme {
            Theme::Classic => Messages::CLASSIC,
            Theme::Noir => Messages::NOIR,
        }
    }

    /// Fresh session storage with the configured quota
    #[must_use]
    pub fn session_storage(&self) -> MemoryStorage {
        match self.storage.quota_bytes {
            Some(quota) => MemoryStorage::new().with_quota(quota),
            None => MemoryStorage::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_classic() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.order_timings(), OrderTimings::classic());
        assert_eq!(config.order_messages(), Messages::CLASSIC);
    }

    #[test]
    fn theme_defaults_fill_omitted_timings() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            theme = "noir"

            [order]
            success_display_ms = 1000
            "#,
        )
        .unwrap();
        let timings = config.order_timings();
        assert_eq!(timings.submit_delay, Duration::ZERO);
        assert_eq!(timings.success_display, Duration::from_millis(1000));
        assert_eq!(config.order_messages(), Messages::NOIR);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(StorefrontConfig::from_toml_str("colour = \"red\"").is_err());
        assert!(StorefrontConfig::from_toml_str("theme = \"sepia\"").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let config = StorefrontConfig::default()
            .with_theme(Theme::Noir)
            .with_submit_delay_ms(250)
            .with_quota_bytes(4096);
        let text = config.to_toml().unwrap();
        assert_eq!(StorefrontConfig::from_toml_str(&text).unwrap(), config);
    }
}
