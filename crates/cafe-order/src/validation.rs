//! Field validation
//!
//! Rules run on trimmed values. Email is optional but must be well-formed
//! when present.

use crate::form::OrderForm;
use cafe_cart::Cart;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Shown when the name is blank
pub const NAME_REQUIRED: &str = "請輸入姓名";
/// Shown when the phone is blank or malformed
pub const PHONE_INVALID: &str = "請輸入有效的手機號碼（格式：09xxxxxxxx）";
/// Shown when a non-empty email is malformed
pub const EMAIL_INVALID: &str = "請輸入有效的 Email 格式";
/// Shown when the pickup store is blank
pub const STORE_REQUIRED: &str = "請輸入取貨門市";
/// Shown when submitting with an empty cart
pub const CART_EMPTY: &str = "購物車是空的，請先選購商品";

/// Noir: shown when name, phone or store is blank
pub const NOIR_REQUIRED: &str = "請填寫必填欄位";
/// Noir: shown when the phone is malformed
pub const NOIR_PHONE_INVALID: &str = "請輸入有效的手機號碼（09開頭，共10碼）";
/// Noir: shown when submitting with an empty cart
pub const NOIR_CART_EMPTY: &str = "請先選擇嫌疑人";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^09[0-9]{8}$").expect("Invalid regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Wording for each kind of invalid input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Messages {
    /// Blank name
    pub name_required: &'static str,
    /// Blank phone
    pub phone_required: &'static str,
    /// Phone that does not match `09` plus eight digits
    pub phone_invalid: &'static str,
    /// Non-empty, malformed email
    pub email_invalid: &'static str,
    /// Blank pickup store
    pub store_required: &'static str,
    /// Empty cart
    pub cart_empty: &'static str,
}

impl Messages {
    /// Classic storefront wording; a blank phone reads as malformed
    pub const CLASSIC: Messages = Messages {
        name_required: NAME_REQUIRED,
        phone_required: PHONE_INVALID,
        phone_invalid: PHONE_INVALID,
        email_invalid: EMAIL_INVALID,
        store_required: STORE_REQUIRED,
        cart_empty: CART_EMPTY,
    };

    /// Noir storefront wording; blank required fields share one message
    pub const NOIR: Messages = Messages {
        name_required: NOIR_REQUIRED,
        phone_required: NOIR_REQUIRED,
        phone_invalid: NOIR_PHONE_INVALID,
        email_invalid: EMAIL_INVALID,
        store_required: NOIR_REQUIRED,
        cart_empty: NOIR_CART_EMPTY,
    };
}

impl Default for Messages {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Something the form can be invalid about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// Customer name
    Name,
    /// Mobile number
    Phone,
    /// Contact email
    Email,
    /// Pickup store
    Store,
    /// Cart contents
    Cart,
}

impl FormField {
    /// Every validated field, in display order
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Store,
        FormField::Cart,
    ];

    /// Field name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Store => "store",
            FormField::Cart => "cart",
        }
    }

    /// Element id of the inline message for this field
    #[must_use]
    pub fn error_element_id(self) -> &'static str {
        match self {
            FormField::Name => "nameError",
            FormField::Phone => "phoneError",
            FormField::Email => "emailError",
            FormField::Store => "storeError",
            FormField::Cart => "cartError",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    /// No errors
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for field
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Set or clear the message for one field
    pub fn set(&mut self, field: FormField, message: Option<&'static str>) {
        match message {
            Some(msg) => {
                self.0.insert(field, msg);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    /// Drop every message
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Check if field has a message
    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of invalid fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if every field is valid
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages in field order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate one field with the classic wording; `None` means valid
#[must_use]
pub fn validate_field(form: &OrderForm, cart: &Cart, field: FormField) -> Option<&'static str> {
    validate_field_with(form, cart, field, &Messages::CLASSIC)
}

/// Validate one field with the given wording
#[must_use]
pub fn validate_field_with(
    form: &OrderForm,
    cart: &Cart,
    field: FormField,
    messages: &Messages,
) -> Option<&'static str> {
    match field {
        FormField::Name => form.name.trim().is_empty().then_some(messages.name_required),
        FormField::Phone => {
            let phone = form.phone.trim();
            if phone.is_empty() {
                Some(messages.phone_required)
            } else {
                (!PHONE_RE.is_match(phone)).then_some(messages.phone_invalid)
            }
        }
        FormField::Email => {
            let email = form.email.trim();
            (!email.is_empty() && !EMAIL_RE.is_match(email)).then_some(messages.email_invalid)
        }
        FormField::Store => form.store.trim().is_empty().then_some(messages.store_required),
        FormField::Cart => cart.is_empty().then_some(messages.cart_empty),
    }
}

/// Validate every field with the classic wording
#[must_use]
pub fn validate(form: &OrderForm, cart: &Cart) -> FieldErrors {
    validate_with(form, cart, &Messages::CLASSIC)
}

/// Validate every field with the given wording
#[must_use]
pub fn validate_with(form: &OrderForm, cart: &Cart, messages: &Messages) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in FormField::ALL {
        errors.set(field, validate_field_with(form, cart, field, messages));
    }
    errors
}
