//! Cart presenters
//!
//! Each presenter renders one surface from the current cart and nothing
//! else. Controls carry `data-action` attributes that the page routes back
//! into [`cafe_cart::CartStore::dispatch`].

use crate::html::{action_attrs, escape, price};
use crate::theme::Theme;
use cafe_cart::{Cart, CartAction, CartLineItem};

/// Renders one surface from a cart snapshot
pub trait CartPresenter {
    /// Render the surface's HTML
    fn render(&self, cart: &Cart) -> String;
}

/// Nav badge: total quantity
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgePresenter;

impl CartPresenter for BadgePresenter {
    fn render(&self, cart: &Cart) -> String {
        format!("<span id=\"cartCount\" class=\"nav__cart-count\">{}</span>", cart.item_count())
    }
}

/// Cart sidebar: lines with quantity controls, then the total
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarPresenter {
    theme: Theme,
}

impl SidebarPresenter {
    /// Create sidebar presenter for theme
    #[inline]
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn render_line(&self, item: &CartLineItem) -> String {
        let dec = action_attrs(&CartAction::ChangeQuantity { id: item.id, delta: -1 });
        let inc = action_attrs(&CartAction::ChangeQuantity { id: item.id, delta: 1 });
        let remove = action_attrs(&CartAction::Remove(item.id));
        let name = escape(&item.name);

        match self.theme {
            Theme::Classic => format!(
                concat!(
                    "<div class=\"cart-item\">",
                    "<div class=\"cart-item__info\">",
                    "<div class=\"cart-item__name\">{name}</div>",
                    "<div class=\"cart-item__price\">{unit} x {qty}</div>",
                    "</div>",
                    "<div class=\"cart-item__controls\">",
                    "<button class=\"cart-item__qty\"{dec} aria-label=\"減少\">−</button>",
                    "<span class=\"cart-item__quantity\">{qty}</span>",
                    "<button class=\"cart-item__qty\"{inc} aria-label=\"增加\">+</button>",
                    "</div>",
                    "<button class=\"cart-item__remove\"{remove} aria-label=\"移除\">✕</button>",
                    "</div>"
                ),
                name = name,
                unit = price(u64::from(item.price)),
                qty = item.quantity,
                dec = dec,
                inc = inc,
                remove = remove,
            ),
            Theme::Noir => format!(
                concat!(
                    "<div class=\"border border-white/10 bg-noir-black rounded p-4 mb-4\">",
                    "<div class=\"flex gap-4\">",
                    "<img src=\"{image}\" alt=\"{name}\" class=\"w-20 h-20 object-cover rounded grayscale\" />",
                    "<div class=\"flex-1\">",
                    "<h4 class=\"font-headline text-white tracking-wider\">{name}</h4>",
                    "<p class=\"text-xs text-gray-500\">{series}</p>",
                    "<p class=\"text-clue-amber font-bold mt-1\">{unit}</p>",
                    "</div></div>",
                    "<div class=\"flex justify-between items-center mt-4\">",
                    "<div class=\"flex items-center gap-2\">",
                    "<button{dec} class=\"w-8 h-8 bg-shadow-grey rounded text-white\">",
                    "<span class=\"material-symbols-outlined text-sm\">remove</span></button>",
                    "<span class=\"w-8 text-center font-headline text-white\">{qty}</span>",
                    "<button{inc} class=\"w-8 h-8 bg-shadow-grey rounded text-white\">",
                    "<span class=\"material-symbols-outlined text-sm\">add</span></button>",
                    "</div>",
                    "<button{remove} class=\"text-blood-red\">",
                    "<span class=\"material-symbols-outlined\">delete</span></button>",
                    "</div></div>"
                ),
                image = escape(&item.image),
                name = name,
                series = escape(&item.series),
                unit = price(u64::from(item.price)),
                qty = item.quantity,
                dec = dec,
                inc = inc,
                remove = remove,
            ),
        }
    }
}

impl CartPresenter for SidebarPresenter {
    fn render(&self, cart: &Cart) -> String {
        let body = if cart.is_empty() {
            match self.theme {
                Theme::Classic => {
                    format!("<p class=\"cart-empty\">{}</p>", self.theme.sidebar_empty())
                }
                Theme::Noir => format!(
                    "<p class=\"text-gray-400 text-center py-8\">{}</p>",
                    self.theme.sidebar_empty()
                ),
            }
        } else {
            cart.items().iter().map(|item| self.render_line(item)).collect()
        };

        format!(
            "<div id=\"cartSidebarBody\">{body}</div><div id=\"cartTotal\">{}</div>",
            price(cart.total())
        )
    }
}

/// Order-form summary: one row per line with its subtotal, then the total
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderSummaryPresenter {
    theme: Theme,
}

impl OrderSummaryPresenter {
    /// Create summary presenter for theme
    #[inline]
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl CartPresenter for OrderSummaryPresenter {
    fn render(&self, cart: &Cart) -> String {
        let body = if cart.is_empty() {
            match self.theme {
                Theme::Classic => {
                    format!("<p class=\"form__hint\">{}</p>", self.theme.summary_empty())
                }
                Theme::Noir => format!(
                    "<p class=\"text-gray-400 text-sm\">{}</p>",
                    self.theme.summary_empty()
                ),
            }
        } else {
            cart.items()
                .iter()
                .map(|item| match self.theme {
                    Theme::Classic => format!(
                        concat!(
                            "<div class=\"selected-product-item\">",
                            "<span class=\"selected-product-item__name\">{} x {}</span>",
                            "<span class=\"selected-product-item__price\">{}</span>",
                            "</div>"
                        ),
                        escape(&item.name),
                        item.quantity,
                        price(item.subtotal()),
                    ),
                    Theme::Noir => format!(
                        concat!(
                            "<div class=\"flex justify-between items-center py-2 border-b border-white/10\">",
                            "<div><span class=\"font-headline text-white tracking-wider\">{}</span>",
                            "<span class=\"text-gray-400 text-sm ml-2\">x{}</span></div>",
                            "<span class=\"font-headline text-clue-amber\">{}</span>",
                            "</div>"
                        ),
                        escape(&item.name),
                        item.quantity,
                        price(item.subtotal()),
                    ),
                })
                .collect()
        };

        format!(
            "<div id=\"selectedProducts\">{body}</div><div id=\"totalAmount\">{}</div>",
            price(cart.total())
        )
    }
}
