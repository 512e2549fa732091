//! Storefront Session Tests
//!
//! Page-level flows: modal, sidebar, FAQ, scroll, clicks routed from
//! rendered attributes, and the order section end to end.

use cafe_cart::{MemoryStorage, SessionStorage, CART_STORAGE_KEY};
use cafe_catalog::ProductId;
use cafe_order::{
    FormField, FormState, OrderError, NOIR_CART_EMPTY, NOIR_PHONE_INVALID, NOIR_REQUIRED,
    PHONE_INVALID,
};
use cafe_present::Theme;
use cafe_storefront::{Storefront, StorefrontConfig, StorefrontError, UiEvent};
use cafe_test_utils::{builtin_catalog, valid_form, RecordingSubmitter};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn classic() -> Storefront {
    Storefront::from_config(&StorefrontConfig::default())
}

fn noir() -> Storefront {
    Storefront::from_config(&StorefrontConfig::default().with_theme(Theme::Noir))
}

#[test]
fn modal_add_confirms_and_closes() {
    let mut shop = classic();
    shop.open_product(ProductId(1));
    assert_eq!(shop.modal_product().map(|p| p.id), Some(ProductId(1)));

    let notice = shop.add_from_modal().unwrap();
    assert_eq!(notice, "倫敦西區 已加入選購");
    assert!(shop.modal_product().is_none());
    assert_eq!(shop.cart().item_count(), 1);

    assert_eq!(shop.add_from_modal(), None);
}

#[test]
fn unknown_product_detail_ignored() {
    let mut shop = classic();
    shop.open_product(ProductId(999));
    assert!(shop.modal_product().is_none());
}

#[test]
fn noir_add_opens_sidebar_classic_does_not() {
    let mut shop = classic();
    shop.add_to_cart(ProductId(2));
    assert!(!shop.is_sidebar_open());

    let mut shop = noir();
    shop.add_to_cart(ProductId(999));
    assert!(!shop.is_sidebar_open());
    shop.add_to_cart(ProductId(2));
    assert!(shop.is_sidebar_open());
}

#[test]
fn sidebar_controls() {
    let mut shop = classic();
    shop.toggle_sidebar();
    assert!(shop.is_sidebar_open());
    shop.go_to_order();
    assert!(!shop.is_sidebar_open());
    shop.open_sidebar();
    shop.close_sidebar();
    assert!(!shop.is_sidebar_open());
}

#[test]
fn nav_scroll_threshold() {
    let mut shop = classic();
    shop.on_scroll(100);
    assert!(!shop.is_nav_scrolled());
    shop.on_scroll(101);
    assert!(shop.is_nav_scrolled());
    shop.on_scroll(0);
    assert!(!shop.is_nav_scrolled());
}

#[test]
fn faq_mode_follows_theme() {
    let mut shop = classic();
    shop.toggle_faq(0);
    shop.toggle_faq(2);
    assert_eq!(shop.faq().open_indices(), vec![2]);

    let mut shop = noir();
    shop.toggle_faq(0);
    shop.toggle_faq(2);
    assert_eq!(shop.faq().open_indices(), vec![0, 2]);
}

#[test]
fn clicks_route_through_rendered_attributes() {
    let mut shop = classic();
    shop.click("view", Some("3")).unwrap();
    let notice = shop.click("modal-add", Some("3")).unwrap();
    assert!(notice.unwrap().ends_with("已加入選購"));

    shop.click("increment", Some("3")).unwrap();
    assert_eq!(shop.cart().item_count(), 2);
    shop.click("remove", Some("3")).unwrap();
    assert!(shop.cart().items().is_empty());

    assert!(matches!(
        shop.click("explode", None),
        Err(StorefrontError::Action(_))
    ));
    assert_eq!(shop.handle(UiEvent::ToggleSidebar), None);
    assert!(shop.is_sidebar_open());
}

#[test]
fn surfaces_track_cart() {
    let mut shop = classic();
    shop.add_to_cart(ProductId(1));
    shop.add_to_cart(ProductId(1));
    shop.add_to_cart(ProductId(2));

    assert!(shop.badge().html().contains(">3<"));
    assert!(shop.sidebar().html().contains("NT$ 1200"));
    assert!(shop.summary().html().contains("NT$ 1200"));

    let page = shop.render_page();
    assert!(page.contains("id=\"productsGrid\""));
    assert!(page.contains("id=\"faqList\""));
    assert!(page.contains("id=\"testimonialsGrid\""));
    assert!(page.contains("id=\"orderForm\""));
    assert!(page.contains(&shop.badge().html()));
    assert!(!page.contains("modal is-open"));
}

#[test]
fn rehydrates_cart_from_storage() {
    let storage = MemoryStorage::new().with_item(
        CART_STORAGE_KEY,
        r#"[{"id":4,"name":"莎士比亞","price":360,"image":"","quantity":2}]"#,
    );
    let shop = Storefront::new(&StorefrontConfig::default(), builtin_catalog(), storage);
    assert_eq!(shop.cart().item_count(), 2);
    assert!(shop.badge().html().contains(">2<"));
}

#[test]
fn blur_reports_single_field() {
    let mut shop = classic();
    shop.form_mut().phone = "12345".into();
    assert_eq!(shop.blur(FormField::Phone), Some(PHONE_INVALID));
    assert_eq!(shop.order().errors().len(), 1);

    let page = shop.render_page();
    assert!(page.contains(PHONE_INVALID));
}

#[tokio::test(start_paused = true)]
async fn order_success_then_reset() {
    let submitter = RecordingSubmitter::new();
    let mut shop = Storefront::with_submitter(
        &StorefrontConfig::default(),
        builtin_catalog(),
        MemoryStorage::new(),
        Box::new(submitter.clone()),
    );
    shop.add_to_cart(ProductId(5));
    *shop.form_mut() = valid_form();

    let receipt = shop.submit_order().await.unwrap();
    assert_eq!(receipt.total, 380);
    assert!(shop.is_order_complete());
    assert!(shop.cart().items().is_empty());
    assert!(shop.badge().html().contains(">0<"));
    assert_eq!(shop.cart().storage().get_item(CART_STORAGE_KEY).as_deref(), Some("[]"));

    let page = shop.render_page();
    assert!(page.contains("id=\"formSuccess\""));
    assert!(!page.contains("id=\"orderForm\""));
    assert!(page.contains(&receipt.order_id.to_string()));

    tokio::time::advance(Duration::from_millis(5000)).await;
    assert!(shop.poll_timers());
    assert_eq!(shop.order().state(), FormState::Editing);
    assert!(shop.render_page().contains("id=\"orderForm\""));
    assert_eq!(submitter.payloads().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn invalid_order_keeps_cart() {
    let mut shop = noir();
    shop.add_to_cart(ProductId(1));
    *shop.form_mut() = valid_form().with_phone("12345");

    let err = shop.submit_order().await.unwrap_err();
    match err {
        StorefrontError::Order(OrderError::Validation(errors)) => {
            assert_eq!(errors.get(FormField::Phone), Some(NOIR_PHONE_INVALID));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(shop.cart().item_count(), 1);
    assert_eq!(shop.order().state(), FormState::Editing);
}

#[tokio::test(start_paused = true)]
async fn noir_form_uses_noir_wording() {
    let mut shop = noir();
    let err = shop.submit_order().await.unwrap_err();
    match err {
        StorefrontError::Order(OrderError::Validation(errors)) => {
            assert_eq!(errors.get(FormField::Name), Some(NOIR_REQUIRED));
            assert_eq!(errors.get(FormField::Phone), Some(NOIR_REQUIRED));
            assert_eq!(errors.get(FormField::Store), Some(NOIR_REQUIRED));
            assert_eq!(errors.get(FormField::Cart), Some(NOIR_CART_EMPTY));
        }
        other => panic!("unexpected error: {other}"),
    }

    let page = shop.render_page();
    assert!(page.contains(NOIR_REQUIRED));
    assert!(!page.contains(PHONE_INVALID));

    let mut shop = classic();
    shop.form_mut().phone = "12345".into();
    assert_eq!(shop.blur(FormField::Phone), Some(PHONE_INVALID));
}
