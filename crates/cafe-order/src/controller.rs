//! Order form controller
//!
//! Owns the form values, inline errors and panel state. Submission validates,
//! waits the configured delay, hands the payload to the [`OrderSubmitter`],
//! clears the cart and shows the success panel until its deadline passes.

use crate::error::OrderError;
use crate::form::OrderForm;
use crate::state::{validate_transition, FormState};
use crate::submit::{LoggingSubmitter, OrderPayload, OrderReceipt, OrderSubmitter};
use crate::validation::{self, FieldErrors, FormField, Messages};
use cafe_cart::{Cart, CartStore, SessionStorage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Simulated hand-off delay and success panel duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTimings {
    /// Wait between entering `Submitting` and calling the submitter
    pub submit_delay: Duration,
    /// How long the success panel stays before the form resets
    pub success_display: Duration,
}

impl OrderTimings {
    /// Classic storefront: 1.5 s hand-off, 5 s success panel
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            success_display: Duration::from_millis(5000),
        }
    }

    /// Noir storefront: immediate hand-off, 3 s success panel
    #[must_use]
    pub const fn noir() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            success_display: Duration::from_millis(3000),
        }
    }
}

impl Default for OrderTimings {
    fn default() -> Self {
        Self::classic()
    }
}

/// Order form controller
pub struct OrderFormController {
    form: OrderForm,
    errors: FieldErrors,
    state: FormState,
    success_deadline: Option<Instant>,
    last_receipt: Option<OrderReceipt>,
    timings: OrderTimings,
    messages: Messages,
    submitter: Box<dyn OrderSubmitter>,
}

impl OrderFormController {
    /// Controller with the logging submitter
    #[must_use]
    pub fn new(timings: OrderTimings) -> Self {
        Self::with_submitter(timings, Box::new(LoggingSubmitter))
    }

    /// Controller with a custom submitter
    #[must_use]
    pub fn with_submitter(timings: OrderTimings, submitter: Box<dyn OrderSubmitter>) -> Self {
        Self {
            form: OrderForm::new(),
            errors: FieldErrors::new(),
            state: FormState::Editing,
            success_deadline: None,
            last_receipt: None,
            timings,
            messages: Messages::CLASSIC,
            submitter,
        }
    }

    /// Use a different set of inline messages
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Current form values
    #[inline]
    #[must_use]
    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Editable form values
    #[inline]
    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Inline messages currently shown
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Receipt of the most recent accepted order
    #[must_use]
    pub fn last_receipt(&self) -> Option<&OrderReceipt> {
        self.last_receipt.as_ref()
    }

    /// Configured timings
    #[must_use]
    pub fn timings(&self) -> OrderTimings {
        self.timings
    }

    /// Inline message wording
    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// When the success panel will be dismissed
    #[must_use]
    pub fn success_deadline(&self) -> Option<Instant> {
        self.success_deadline
    }

    /// Validate one field and update only its message
    pub fn validate_field(&mut self, field: FormField, cart: &Cart) -> Option<&'static str> {
        let message = validation::validate_field_with(&self.form, cart, field, &self.messages);
        self.errors.set(field, message);
        message
    }

    /// Submit the order
    ///
    /// Only accepted in [`FormState::Editing`]. On validation failure the
    /// messages are recorded and the cart is left alone. On success the cart
    /// is cleared and the success panel is shown.
    ///
    /// # Cancellation
    /// Dropping the future before it completes returns the form to
    /// [`FormState::Editing`] with its values and the cart untouched; the
    /// submitter may or may not have seen the payload.
    pub async fn submit<S: SessionStorage>(
        &mut self,
        store: &mut CartStore<S>,
    ) -> Result<OrderReceipt, OrderError> {
        validate_transition(self.state, FormState::Submitting)?;

        let errors = validation::validate_with(&self.form, store.cart(), &self.messages);
        if !errors.is_empty() {
            debug!(invalid = errors.len(), "order form rejected");
            self.errors = errors.clone();
            return Err(OrderError::Validation(errors));
        }
        self.errors.clear();

        let payload = OrderPayload::build(&self.form, store.cart());
        let submitting = SubmittingGuard::enter(&mut self.state)?;

        if !self.timings.submit_delay.is_zero() {
            tokio::time::sleep(self.timings.submit_delay).await;
        }

        match self.submitter.submit(&payload).await {
            Ok(receipt) => {
                store.clear();
                submitting.finish(FormState::Success)?;
                self.success_deadline = Some(Instant::now() + self.timings.success_display);
                self.last_receipt = Some(receipt.clone());
                info!(order_id = %receipt.order_id, total = receipt.total, "order accepted");
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "order submission failed, returning to form");
                submitting.finish(FormState::Editing)?;
                Err(e)
            }
        }
    }

    /// Dismiss the success panel if its deadline has passed
    ///
    /// Returns true when the form was reset.
    pub fn poll_timers(&mut self) -> bool {
        match self.success_deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.reset_after_success();
                true
            }
            _ => false,
        }
    }

    /// Wait for the success panel's deadline, then reset the form
    ///
    /// Returns immediately when no success panel is showing.
    pub async fn wait_for_reset(&mut self) {
        if let Some(deadline) = self.success_deadline {
            tokio::time::sleep_until(deadline).await;
            self.reset_after_success();
        }
    }

    fn reset_after_success(&mut self) {
        if self.transition(FormState::Editing).is_ok() {
            self.form.reset();
            self.errors.clear();
            self.success_deadline = None;
            debug!("success panel dismissed, form reset");
        }
    }

    fn transition(&mut self, to: FormState) -> Result<(), OrderError> {
        validate_transition(self.state, to)?;
        debug!(from = %self.state, to = %to, "order form transition");
        self.state = to;
        Ok(())
    }
}

/// Holds the form in `Submitting`; reverts to `Editing` unless finished
struct SubmittingGuard<'a> {
    state: &'a mut FormState,
    finished: bool,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(state: &'a mut FormState) -> Result<Self, OrderError> {
        validate_transition(*state, FormState::Submitting)?;
        debug!(from = %state, to = %FormState::Submitting, "order form transition");
        *state = FormState::Submitting;
        Ok(Self {
            state,
            finished: false,
        })
    }

    fn finish(mut self, to: FormState) -> Result<(), OrderError> {
        validate_transition(*self.state, to)?;
        debug!(from = %self.state, to = %to, "order form transition");
        *self.state = to;
        self.finished = true;
        Ok(())
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("order submission cancelled, returning to form");
            *self.state = FormState::Editing;
        }
    }
}

impl fmt::Debug for OrderFormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderFormController")
            .field("form", &self.form)
            .field("errors", &self.errors)
            .field("state", &self.state)
            .field("success_deadline", &self.success_deadline)
            .field("timings", &self.timings)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}
