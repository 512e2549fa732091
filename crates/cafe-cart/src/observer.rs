//! Cart change observers

use crate::item::Cart;

/// Receives the cart after every change
///
/// Observers get a shared borrow of the current cart and keep no copy of
/// their own; each call is a full re-render, not a patch.
pub trait CartObserver {
    /// Called with the current cart
    fn cart_changed(&mut self, cart: &Cart);
}

impl<T: CartObserver + ?Sized> CartObserver for Box<T> {
    fn cart_changed(&mut self, cart: &Cart) {
        (**self).cart_changed(cart);
    }
}

/// Handle returned by [`crate::CartStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) usize);
