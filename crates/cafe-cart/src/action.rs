//! User-initiated cart actions
//!
//! Rendered controls carry `data-action` and `data-id` attributes; the page
//! turns a click into a [`CartAction`] and hands it to
//! [`crate::CartStore::dispatch`].

use crate::error::ActionError;
use cafe_catalog::ProductId;

/// A cart mutation requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product
    Add(ProductId),
    /// Adjust a line's quantity by a signed delta
    ChangeQuantity {
        /// Product whose line is adjusted
        id: ProductId,
        /// Signed quantity delta
        delta: i64,
    },
    /// Remove a product's line
    Remove(ProductId),
    /// Empty the cart
    Clear,
}

impl CartAction {
    /// Parse from `data-action` / `data-id` attribute values
    ///
    /// Recognized actions: `add`, `increment`, `decrement`, `remove`, `clear`.
    ///
    /// # Errors
    /// - `ActionError::UnknownAction` for any other action name
    /// - `ActionError::MissingId` when a product action has no id
    /// - `ActionError::InvalidId` when the id is not a number
    pub fn from_attrs(action: &str, id: Option<&str>) -> Result<Self, ActionError> {
        if action == "clear" {
            return Ok(Self::Clear);
        }

        let build: fn(ProductId) -> Self = match action {
            "add" => Self::Add,
            "increment" => |id| Self::ChangeQuantity { id, delta: 1 },
            "decrement" => |id| Self::ChangeQuantity { id, delta: -1 },
            "remove" => Self::Remove,
            other => return Err(ActionError::UnknownAction(other.to_string())),
        };

        let raw = id.ok_or_else(|| ActionError::MissingId(action.to_string()))?;
        let id = raw
            .parse::<ProductId>()
            .map_err(|_| ActionError::InvalidId(raw.to_string()))?;

        Ok(build(id))
    }

    /// `data-action` value for this action
    ///
    /// Quantity changes other than ±1 have no rendered control and report
    /// `increment` or `decrement` by sign.
    #[must_use]
    pub fn attr_name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::ChangeQuantity { delta, .. } if *delta < 0 => "decrement",
            Self::ChangeQuantity { .. } => "increment",
            Self::Remove(_) => "remove",
            Self::Clear => "clear",
        }
    }

    /// Product targeted by the action, if any
    #[must_use]
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Self::Add(id) | Self::Remove(id) | Self::ChangeQuantity { id, .. } => Some(*id),
            Self::Clear => None,
        }
    }
}
