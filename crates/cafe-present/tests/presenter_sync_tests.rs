//! Presenter Sync Tests
//!
//! Every mounted surface reflects the same cart after every mutation.

use cafe_cart::{Cart, CartAction, CartStore, MemoryStorage, SessionStorage, CART_STORAGE_KEY};
use cafe_catalog::ProductId;
use cafe_present::{
    html::price, mount, BadgePresenter, CartPresenter, OrderSummaryPresenter, SidebarPresenter,
    Surface, Theme,
};
use cafe_test_utils::builtin_catalog;
use pretty_assertions::assert_eq;

struct Surfaces {
    badge: Surface,
    sidebar: Surface,
    summary: Surface,
}

fn mount_all(store: &mut CartStore, theme: Theme) -> Surfaces {
    Surfaces {
        badge: mount(store, BadgePresenter).0,
        sidebar: mount(store, SidebarPresenter::new(theme)).0,
        summary: mount(store, OrderSummaryPresenter::new(theme)).0,
    }
}

fn assert_in_sync(surfaces: &Surfaces, cart: &Cart, theme: Theme) {
    assert_eq!(surfaces.badge.html(), BadgePresenter.render(cart));
    assert_eq!(surfaces.sidebar.html(), SidebarPresenter::new(theme).render(cart));
    assert_eq!(surfaces.summary.html(), OrderSummaryPresenter::new(theme).render(cart));

    let total = price(cart.total());
    assert!(surfaces.sidebar.html().contains(&total));
    assert!(surfaces.summary.html().contains(&total));
}

#[test]
fn surfaces_agree_across_mutations() {
    for theme in [Theme::Classic, Theme::Noir] {
        let mut store = CartStore::in_memory(builtin_catalog());
        let surfaces = mount_all(&mut store, theme);
        assert_in_sync(&surfaces, store.cart(), theme);

        let actions = [
            CartAction::Add(ProductId(1)),
            CartAction::Add(ProductId(1)),
            CartAction::Add(ProductId(4)),
            CartAction::ChangeQuantity { id: ProductId(1), delta: -1 },
            CartAction::Remove(ProductId(4)),
            CartAction::Add(ProductId(6)),
            CartAction::Clear,
        ];
        for action in actions {
            store.dispatch(action);
            assert_in_sync(&surfaces, store.cart(), theme);
        }
    }
}

#[test]
fn ignored_actions_do_not_rerender() {
    let mut store = CartStore::in_memory(builtin_catalog());
    let surfaces = mount_all(&mut store, Theme::Classic);
    store.add_item(ProductId(2));
    let renders = surfaces.badge.renders();

    store.add_item(ProductId(999));
    store.remove_item(ProductId(3));
    store.change_quantity(ProductId(5), 1);

    assert_eq!(surfaces.badge.renders(), renders);
    assert_eq!(surfaces.summary.renders(), renders);
}

#[test]
fn empty_messages_per_surface() {
    let mut store = CartStore::in_memory(builtin_catalog());
    let surfaces = mount_all(&mut store, Theme::Classic);
    assert!(surfaces.sidebar.html().contains(Theme::Classic.sidebar_empty()));
    assert!(surfaces.summary.html().contains(Theme::Classic.summary_empty()));
    assert!(surfaces.badge.html().contains(">0<"));
}

#[test]
fn reopened_store_renders_rehydrated_cart() {
    let mut store = CartStore::in_memory(builtin_catalog());
    store.add_item(ProductId(3));
    store.add_item(ProductId(3));
    let storage: MemoryStorage = store.into_storage();
    assert!(storage.get_item(CART_STORAGE_KEY).is_some());

    let mut reopened = CartStore::open(builtin_catalog(), storage);
    let surfaces = mount_all(&mut reopened, Theme::Noir);
    assert!(surfaces.badge.html().contains(">2<"));
    assert_in_sync(&surfaces, reopened.cart(), Theme::Noir);
}
