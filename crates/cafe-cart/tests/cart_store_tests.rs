//! Cart Store Tests
//!
//! Invariants of the store across arbitrary mutation sequences, storage
//! mirroring and rehydration.

use cafe_cart::{Cart, CartAction, CartStore, MemoryStorage, SessionStorage, CART_STORAGE_KEY};
use cafe_catalog::ProductId;
use cafe_test_utils::{builtin_catalog, RecordingObserver};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

fn action_strategy() -> impl Strategy<Value = CartAction> {
    // Ids 1..=6 exist in the built-in catalog, 7..=9 do not
    let id = (1u32..=9).prop_map(ProductId);
    prop_oneof![
        id.clone().prop_map(CartAction::Add),
        (id.clone(), -4i64..=4).prop_map(|(id, delta)| CartAction::ChangeQuantity { id, delta }),
        id.prop_map(CartAction::Remove),
    ]
}

fn assert_invariants(cart: &Cart) {
    let mut seen = HashSet::new();
    for item in cart.items() {
        assert!(seen.insert(item.id), "duplicate line for {}", item.id);
        assert!(item.quantity >= 1, "line {} has quantity {}", item.id, item.quantity);
    }
}

proptest! {
    #[test]
    fn prop_lines_unique_and_positive(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut store = CartStore::in_memory(builtin_catalog());
        for action in actions {
            store.dispatch(action);
            assert_invariants(store.cart());
        }
    }

    #[test]
    fn prop_count_and_total_formulas(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut store = CartStore::in_memory(builtin_catalog());
        for action in actions {
            store.dispatch(action);
        }
        let count: u64 = store.items().iter().map(|i| u64::from(i.quantity)).sum();
        let total: u64 = store.items().iter().map(|i| u64::from(i.price) * u64::from(i.quantity)).sum();
        prop_assert_eq!(store.item_count(), count);
        prop_assert_eq!(store.total(), total);
    }

    #[test]
    fn prop_storage_round_trip(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut store = CartStore::in_memory(builtin_catalog());
        for action in actions {
            store.dispatch(action);
        }
        let before = store.cart().clone();
        let reopened = CartStore::open(builtin_catalog(), store.into_storage());
        prop_assert_eq!(reopened.cart(), &before);
    }

    #[test]
    fn prop_unknown_ids_never_change_cart(raw in 7u32..10_000) {
        let mut store = CartStore::in_memory(builtin_catalog());
        store.add_item(ProductId(1));
        let before = store.cart().clone();
        store.add_item(ProductId(raw));
        prop_assert_eq!(store.cart(), &before);
    }
}

#[test]
fn scenario_add_add_add() {
    let mut store = CartStore::in_memory(builtin_catalog());
    store.add_item(ProductId(1));
    store.add_item(ProductId(1));
    store.add_item(ProductId(2));

    let ids: Vec<u32> = store.items().iter().map(|i| i.id.get()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(store.items()[0].quantity, 2);
    assert_eq!(store.items()[1].quantity, 1);
    assert_eq!(store.item_count(), 3);
}

#[test]
fn insertion_order_survives_mutation() {
    let mut store = CartStore::in_memory(builtin_catalog());
    store.add_item(ProductId(3));
    store.add_item(ProductId(1));
    store.add_item(ProductId(2));
    store.change_quantity(ProductId(3), 4);
    store.add_item(ProductId(1));

    let ids: Vec<u32> = store.items().iter().map(|i| i.id.get()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn clear_empties_everything() {
    let mut store = CartStore::in_memory(builtin_catalog());
    store.add_item(ProductId(1));
    store.add_item(ProductId(5));
    store.clear();
    assert!(store.items().is_empty());
    assert_eq!(store.total(), 0);
    assert_eq!(store.item_count(), 0);
}

#[test]
fn total_uses_snapshotted_price() {
    let storage = MemoryStorage::new().with_item(
        CART_STORAGE_KEY,
        r#"[{"id":1,"name":"倫敦西區","price":100,"image":"","series":"城市系列","quantity":2}]"#,
    );
    let mut store = CartStore::open(builtin_catalog(), storage);
    assert_eq!(store.total(), 200);

    // Incrementing an existing line keeps its snapshot
    store.add_item(ProductId(1));
    assert_eq!(store.total(), 300);
}

#[test]
fn malformed_stored_cart_starts_empty() {
    for raw in ["not json", "{\"id\":1}", "[{\"id\":\"x\"}]", "null"] {
        let storage = MemoryStorage::new().with_item(CART_STORAGE_KEY, raw);
        let store = CartStore::open(builtin_catalog(), storage);
        assert!(store.items().is_empty(), "expected empty cart for {raw}");
    }
}

#[test]
fn persist_failure_keeps_in_memory_cart() {
    let storage = MemoryStorage::new().with_quota(16);
    let mut store = CartStore::open(builtin_catalog(), storage);
    let recorder = RecordingObserver::new();
    store.subscribe(Box::new(recorder.clone()));
    store.add_item(ProductId(1));

    assert_eq!(store.item_count(), 1);
    assert!(store.storage().get_item(CART_STORAGE_KEY).is_none());
    assert_eq!(recorder.count(), 2);
    assert_eq!(recorder.last().unwrap().item_count(), 1);
}

#[test]
fn observers_render_after_each_mutation() {
    let mut store = CartStore::in_memory(builtin_catalog());
    let recorder = RecordingObserver::new();
    store.subscribe(Box::new(recorder.clone()));

    store.add_item(ProductId(1));
    store.add_item(ProductId(2));
    store.change_quantity(ProductId(1), -1);

    let counts: Vec<u64> = recorder.snapshots().iter().map(Cart::item_count).collect();
    assert_eq!(counts, vec![0, 1, 2, 1]);
    assert_eq!(recorder.last().as_ref(), Some(store.cart()));
}
