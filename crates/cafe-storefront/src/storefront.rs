//! One storefront session
//!
//! Owns the cart store and everything the page shows around it. Cart
//! surfaces are mounted once and re-render themselves on every cart change;
//! the rest of the page is rendered on demand.

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::event::UiEvent;
use crate::page;
use cafe_cart::{CartAction, CartStore, MemoryStorage, SessionStorage};
use cafe_catalog::{Catalog, Product, ProductId};
use cafe_order::{FormField, FormState, OrderForm, OrderFormController, OrderReceipt, OrderSubmitter};
use cafe_present::{
    mount, render_product_detail, render_product_grid, render_testimonials, BadgePresenter,
    FaqAccordion, OrderSummaryPresenter, SidebarPresenter, Surface, Theme,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Scroll offset past which the nav switches to its scrolled style
pub const NAV_SCROLL_THRESHOLD: u32 = 100;

/// A storefront session
pub struct Storefront<S = MemoryStorage> {
    theme: Theme,
    catalog: Arc<Catalog>,
    store: CartStore<S>,
    badge: Surface,
    sidebar: Surface,
    summary: Surface,
    faq: FaqAccordion,
    sidebar_open: bool,
    modal: Option<ProductId>,
    nav_scrolled: bool,
    order: OrderFormController,
}

impl Storefront<MemoryStorage> {
    /// Session over the built-in catalog with fresh storage
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(
            config,
            Arc::new(Catalog::builtin().clone()),
            config.session_storage(),
        )
    }
}

impl<S: SessionStorage> Storefront<S> {
    /// Open a session, rehydrating the cart from `storage`
    #[must_use]
    pub fn new(config: &StorefrontConfig, catalog: Arc<Catalog>, storage: S) -> Self {
        let order = OrderFormController::new(config.order_timings())
            .with_messages(config.order_messages());
        Self::with_order_controller(config.theme, catalog, storage, order)
    }

    /// Open a session whose orders go to `submitter`
    #[must_use]
    pub fn with_submitter(
        config: &StorefrontConfig,
        catalog: Arc<Catalog>,
        storage: S,
        submitter: Box<dyn OrderSubmitter>,
    ) -> Self {
        let order = OrderFormController::with_submitter(config.order_timings(), submitter)
            .with_messages(config.order_messages());
        Self::with_order_controller(config.theme, catalog, storage, order)
    }

    fn with_order_controller(
        theme: Theme,
        catalog: Arc<Catalog>,
        storage: S,
        order: OrderFormController,
    ) -> Self {
        let mut store = CartStore::open(Arc::clone(&catalog), storage);
        let (badge, _) = mount(&mut store, BadgePresenter);
        let (sidebar, _) = mount(&mut store, SidebarPresenter::new(theme));
        let (summary, _) = mount(&mut store, OrderSummaryPresenter::new(theme));
        let faq = FaqAccordion::new(catalog.faqs().len(), theme.accordion_mode());

        debug!(%theme, lines = store.items().len(), "storefront session opened");

        Self {
            theme,
            catalog,
            store,
            badge,
            sidebar,
            summary,
            faq,
            sidebar_open: false,
            modal: None,
            nav_scrolled: false,
            order,
        }
    }

    /// Active theme
    #[inline]
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Product catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cart store
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &CartStore<S> {
        &self.store
    }

    /// Nav badge surface
    #[must_use]
    pub fn badge(&self) -> &Surface {
        &self.badge
    }

    /// Sidebar surface
    #[must_use]
    pub fn sidebar(&self) -> &Surface {
        &self.sidebar
    }

    /// Order summary surface
    #[must_use]
    pub fn summary(&self) -> &Surface {
        &self.summary
    }

    /// FAQ accordion state
    #[must_use]
    pub fn faq(&self) -> &FaqAccordion {
        &self.faq
    }

    /// Order form controller
    #[must_use]
    pub fn order(&self) -> &OrderFormController {
        &self.order
    }

    /// Check if the cart sidebar is open
    #[must_use]
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Check if the nav shows its scrolled style
    #[must_use]
    pub fn is_nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    /// Product shown in the detail modal
    #[must_use]
    pub fn modal_product(&self) -> Option<&Product> {
        self.modal.and_then(|id| self.catalog.find_by_id(id))
    }

    /// Show a product's detail; unknown ids are ignored
    pub fn open_product(&mut self, id: ProductId) {
        if self.catalog.find_by_id(id).is_some() {
            self.modal = Some(id);
        } else {
            debug!(product_id = %id, "ignoring detail for unknown product");
        }
    }

    /// Hide the detail modal
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Add the product shown in the detail and close it
    ///
    /// Returns the confirmation notice, or `None` when no detail is open.
    pub fn add_from_modal(&mut self) -> Option<String> {
        let id = self.modal.take()?;
        let name = self.catalog.find_by_id(id)?.name.clone();
        self.store.add_item(id);
        Some(format!("{name} 已加入選購"))
    }

    /// Add one unit of a product; the noir theme also opens the sidebar
    pub fn add_to_cart(&mut self, id: ProductId) {
        self.store.add_item(id);
        if self.theme.opens_sidebar_on_add() && self.catalog.find_by_id(id).is_some() {
            self.sidebar_open = true;
        }
    }

    /// Apply a cart control
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::Add(id) => self.add_to_cart(id),
            other => self.store.dispatch(other),
        }
    }

    /// Apply a decoded page event
    ///
    /// Returns a notice to show, if any.
    pub fn handle(&mut self, event: UiEvent) -> Option<String> {
        match event {
            UiEvent::Cart(action) => self.dispatch(action),
            UiEvent::View(id) => self.open_product(id),
            UiEvent::ModalAdd => return self.add_from_modal(),
            UiEvent::CloseModal => self.close_modal(),
            UiEvent::ToggleFaq(index) => self.toggle_faq(index),
            UiEvent::ToggleSidebar => self.toggle_sidebar(),
            UiEvent::CloseSidebar => self.close_sidebar(),
            UiEvent::GoToOrder => self.go_to_order(),
        }
        None
    }

    /// Decode and apply a click on a rendered control
    ///
    /// # Errors
    /// Returns `StorefrontError::Action` for unknown actions or bad ids.
    pub fn click(&mut self, action: &str, id: Option<&str>) -> Result<Option<String>> {
        let event = UiEvent::from_attrs(action, id)?;
        Ok(self.handle(event))
    }

    /// Open or close the cart sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Open the cart sidebar
    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Close the cart sidebar
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Close the sidebar on the way to the order form
    pub fn go_to_order(&mut self) {
        self.sidebar_open = false;
    }

    /// Update the nav style for a scroll offset
    pub fn on_scroll(&mut self, y: u32) {
        self.nav_scrolled = y > NAV_SCROLL_THRESHOLD;
    }

    /// Toggle an FAQ entry
    pub fn toggle_faq(&mut self, index: usize) {
        self.faq.toggle(index);
    }

    /// Editable order form values
    pub fn form_mut(&mut self) -> &mut OrderForm {
        self.order.form_mut()
    }

    /// Validate one order form field, as when it loses focus
    pub fn blur(&mut self, field: FormField) -> Option<&'static str> {
        self.order.validate_field(field, self.store.cart())
    }

    /// Submit the order form
    ///
    /// # Errors
    /// Returns `StorefrontError::Order` on validation failure, re-entry, or
    /// submitter failure.
    pub async fn submit_order(&mut self) -> Result<OrderReceipt> {
        Ok(self.order.submit(&mut self.store).await?)
    }

    /// Fire due timers; returns true when the success panel was dismissed
    pub fn poll_timers(&mut self) -> bool {
        self.order.poll_timers()
    }

    /// Wait until the success panel is dismissed
    pub async fn wait_for_reset(&mut self) {
        self.order.wait_for_reset().await;
    }

    /// Check if the success panel is showing
    #[must_use]
    pub fn is_order_complete(&self) -> bool {
        self.order.state() == FormState::Success
    }

    /// Render the whole page
    #[must_use]
    pub fn render_page(&self) -> String {
        let theme = self.theme;
        let detail = self.modal_product().map(|p| render_product_detail(p, theme));

        format!(
            "<div class=\"page page--{theme}\">{nav}{grid}{faq}{testimonials}{sidebar}{order}{modal}</div>",
            nav = page::render_nav(theme, self.nav_scrolled, &self.badge.html()),
            grid = render_product_grid(self.catalog.all(), theme),
            faq = self.faq.render(self.catalog.faqs(), theme),
            testimonials = render_testimonials(self.catalog.testimonials(), theme),
            sidebar = page::render_sidebar(theme, self.sidebar_open, &self.sidebar.html()),
            order = page::render_order_section(theme, &self.order, &self.summary.html()),
            modal = page::render_modal(detail.as_deref()),
        )
    }
}

impl<S: SessionStorage + fmt::Debug> fmt::Debug for Storefront<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("theme", &self.theme)
            .field("store", &self.store)
            .field("sidebar_open", &self.sidebar_open)
            .field("modal", &self.modal)
            .field("nav_scrolled", &self.nav_scrolled)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
