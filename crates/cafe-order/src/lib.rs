//! Café Théâtre Order Form
//!
//! The order section of the storefront:
//! - [`OrderForm`]: the typed-in values
//! - [`validate`] / [`validate_field`]: field rules and inline messages, worded
//!   per storefront through [`Messages`]
//! - [`FormState`]: `Editing → Submitting → Success → Editing`
//! - [`OrderFormController`]: drives submission against a [`cafe_cart::CartStore`]
//! - [`OrderSubmitter`]: where accepted orders go ([`LoggingSubmitter`] by default)

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod controller;
mod error;
mod form;
mod state;
mod submit;
mod validation;

// Re-exports
pub use controller::{OrderFormController, OrderTimings};
pub use error::OrderError;
pub use form::OrderForm;
pub use state::{allowed_transitions, validate_transition, FormState};
pub use submit::{LoggingSubmitter, OrderId, OrderPayload, OrderReceipt, OrderSubmitter};
pub use validation::{
    validate, validate_field, validate_field_with, validate_with, FieldErrors, FormField,
    Messages, CART_EMPTY, EMAIL_INVALID, NAME_REQUIRED, NOIR_CART_EMPTY, NOIR_PHONE_INVALID,
    NOIR_REQUIRED, PHONE_INVALID, STORE_REQUIRED,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
