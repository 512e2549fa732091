//! Mounted presenters
//!
//! A [`Surface`] is the rendered output of one presenter, shared between the
//! observer registered on the store and whoever reads the page.

use crate::cart_view::CartPresenter;
use cafe_cart::{Cart, CartObserver, CartStore, ObserverId, SessionStorage};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct SurfaceState {
    html: String,
    renders: u64,
}

/// Latest rendered HTML of one presenter
#[derive(Debug, Clone, Default)]
pub struct Surface {
    inner: Arc<Mutex<SurfaceState>>,
}

impl Surface {
    /// Create blank surface
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current HTML
    #[must_use]
    pub fn html(&self) -> String {
        self.inner.lock().html.clone()
    }

    /// How many times the surface has been rendered
    #[must_use]
    pub fn renders(&self) -> u64 {
        self.inner.lock().renders
    }

    fn replace(&self, html: String) {
        let mut state = self.inner.lock();
        state.html = html;
        state.renders += 1;
    }
}

/// Presenter bound to a surface; re-renders on every cart change
#[derive(Debug)]
pub struct Mounted<P> {
    presenter: P,
    surface: Surface,
}

impl<P: CartPresenter> Mounted<P> {
    /// Bind presenter to a new surface
    #[must_use]
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            surface: Surface::new(),
        }
    }

    /// Handle to the surface this presenter renders into
    #[inline]
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface.clone()
    }
}

impl<P: CartPresenter> CartObserver for Mounted<P> {
    fn cart_changed(&mut self, cart: &Cart) {
        self.surface.replace(self.presenter.render(cart));
    }
}

/// Mount presenter on the store; returns its surface and observer handle
pub fn mount<S, P>(store: &mut CartStore<S>, presenter: P) -> (Surface, ObserverId)
where
    S: SessionStorage,
    P: CartPresenter + 'static,
{
    let mounted = Mounted::new(presenter);
    let surface = mounted.surface();
    let id = store.subscribe(Box::new(mounted));
    (surface, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_view::BadgePresenter;
    use cafe_catalog::{Catalog, ProductId};

    #[test]
    fn mount_renders_immediately_and_on_change() {
        let mut store = CartStore::in_memory(Arc::new(Catalog::builtin().clone()));
        let (badge, _) = mount(&mut store, BadgePresenter);
        assert_eq!(badge.renders(), 1);
        assert!(badge.html().contains(">0<"));

        store.add_item(ProductId(1));
        assert_eq!(badge.renders(), 2);
        assert!(badge.html().contains(">1<"));
    }

    #[test]
    fn unsubscribed_surface_goes_stale() {
        let mut store = CartStore::in_memory(Arc::new(Catalog::builtin().clone()));
        let (badge, id) = mount(&mut store, BadgePresenter);
        store.unsubscribe(id);
        store.add_item(ProductId(1));
        assert!(badge.html().contains(">0<"));
    }
}
