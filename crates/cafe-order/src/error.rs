//! Order errors

use crate::state::FormState;
use crate::validation::FieldErrors;
use thiserror::Error;

/// Order form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// One or more fields failed validation
    #[error("order form is invalid: {0}")]
    Validation(FieldErrors),

    /// Transition not permitted from the current state
    #[error("illegal form transition: {from} -> {to}")]
    IllegalTransition {
        /// Current state
        from: FormState,
        /// Requested state
        to: FormState,
    },

    /// The submitter rejected the order
    #[error("order submission failed: {0}")]
    Submission(String),
}

impl OrderError {
    /// Field errors, when this is a validation failure
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            OrderError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
