//! Configuration File Tests

use cafe_present::Theme;
use cafe_storefront::{Storefront, StorefrontConfig, StorefrontError};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn loads_theme_and_overrides_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
theme = "noir"

[order]
submit_delay_ms = 200

[storage]
quota_bytes = 64
"#
    )
    .unwrap();

    let config = StorefrontConfig::from_file(file.path()).unwrap();
    assert_eq!(config.theme, Theme::Noir);
    let timings = config.order_timings();
    assert_eq!(timings.submit_delay, Duration::from_millis(200));
    assert_eq!(timings.success_display, Duration::from_millis(3000));

    let shop = Storefront::from_config(&config);
    assert_eq!(shop.theme(), Theme::Noir);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StorefrontConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, StorefrontError::Io(_)));
}

#[test]
fn malformed_file_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "theme = ").unwrap();
    let err = StorefrontConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, StorefrontError::Config(_)));
}

#[test]
fn tiny_quota_keeps_cart_in_memory() {
    let config = StorefrontConfig::default().with_quota_bytes(8);
    let mut shop = Storefront::from_config(&config);
    shop.add_to_cart(cafe_catalog::ProductId(1));
    assert_eq!(shop.cart().item_count(), 1);
    assert!(shop.badge().html().contains(">1<"));
}
