//! Page events decoded from rendered `data-action` / `data-id` attributes

use cafe_cart::{ActionError, CartAction};
use cafe_catalog::ProductId;
use cafe_present::{CLOSE_MODAL_ACTION, MODAL_ADD_ACTION, TOGGLE_FAQ_ACTION, VIEW_ACTION};

/// `data-action` of the nav cart button
pub const TOGGLE_SIDEBAR_ACTION: &str = "toggle-sidebar";
/// `data-action` of the sidebar close button and overlay
pub const CLOSE_SIDEBAR_ACTION: &str = "close-sidebar";
/// `data-action` of the sidebar checkout button
pub const GO_TO_ORDER_ACTION: &str = "go-to-order";

/// A click on a rendered control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Cart control
    Cart(CartAction),
    /// Open a product's detail
    View(ProductId),
    /// Add the product shown in the detail
    ModalAdd,
    /// Close the detail
    CloseModal,
    /// Toggle an FAQ entry by position
    ToggleFaq(usize),
    /// Open or close the cart sidebar
    ToggleSidebar,
    /// Close the cart sidebar
    CloseSidebar,
    /// Close the sidebar and jump to the order form
    GoToOrder,
}

impl UiEvent {
    /// Decode attribute values
    ///
    /// # Errors
    /// Same as [`CartAction::from_attrs`] for unknown actions and missing or
    /// malformed ids.
    pub fn from_attrs(action: &str, id: Option<&str>) -> Result<Self, ActionError> {
        match action {
            VIEW_ACTION => Ok(Self::View(parse_id(action, id)?)),
            MODAL_ADD_ACTION => Ok(Self::ModalAdd),
            CLOSE_MODAL_ACTION => Ok(Self::CloseModal),
            TOGGLE_FAQ_ACTION => {
                let raw = id.ok_or_else(|| ActionError::MissingId(action.to_string()))?;
                let index = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ActionError::InvalidId(raw.to_string()))?;
                Ok(Self::ToggleFaq(index))
            }
            TOGGLE_SIDEBAR_ACTION => Ok(Self::ToggleSidebar),
            CLOSE_SIDEBAR_ACTION => Ok(Self::CloseSidebar),
            GO_TO_ORDER_ACTION => Ok(Self::GoToOrder),
            _ => CartAction::from_attrs(action, id).map(Self::Cart),
        }
    }
}

fn parse_id(action: &str, id: Option<&str>) -> Result<ProductId, ActionError> {
    let raw = id.ok_or_else(|| ActionError::MissingId(action.to_string()))?;
    raw.parse::<ProductId>()
        .map_err(|_| ActionError::InvalidId(raw.to_string()))
}
