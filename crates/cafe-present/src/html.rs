//! HTML helpers shared by all presenters

use cafe_cart::CartAction;

/// Escape text for element content and quoted attribute values
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Price label, e.g. `NT$ 420`
#[inline]
#[must_use]
pub fn price(amount: u64) -> String {
    format!("NT$ {amount}")
}

/// `data-action` / `data-id` attributes routing a click to a cart action
#[must_use]
pub fn action_attrs(action: &CartAction) -> String {
    match action.product_id() {
        Some(id) => format!(" data-action=\"{}\" data-id=\"{id}\"", action.attr_name()),
        None => format!(" data-action=\"{}\"", action.attr_name()),
    }
}

/// `data-action` attributes for a page-level control (not a cart action)
#[must_use]
pub fn ui_attrs(action: &str, id: Option<u32>) -> String {
    match id {
        Some(id) => format!(" data-action=\"{}\" data-id=\"{id}\"", escape(action)),
        None => format!(" data-action=\"{}\"", escape(action)),
    }
}
