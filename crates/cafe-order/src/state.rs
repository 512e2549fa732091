//! Order form state machine

use crate::error::OrderError;
use serde::Serialize;
use std::fmt;

/// Which panel the order section shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    /// Form is shown and editable
    #[default]
    Editing,
    /// Order is being handed off
    Submitting,
    /// Success panel is shown
    Success,
}

impl FormState {
    /// Every state
    pub const ALL: [FormState; 3] = [FormState::Editing, FormState::Submitting, FormState::Success];
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormState::Editing => "editing",
            FormState::Submitting => "submitting",
            FormState::Success => "success",
        };
        f.write_str(name)
    }
}

/// Validates a state transition.
pub fn validate_transition(from: FormState, to: FormState) -> Result<(), OrderError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(OrderError::IllegalTransition { from, to })
    }
}

/// States reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: FormState) -> &'static [FormState] {
    use FormState::{Editing, Submitting, Success};
    match from {
        Editing => &[Submitting],
        Submitting => &[Success, Editing],
        Success => &[Editing],
    }
}

fn allowed(from: FormState, to: FormState) -> bool {
    allowed_transitions(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state() -> impl Strategy<Value = FormState> {
        prop::sample::select(FormState::ALL.to_vec())
    }

    #[test]
    fn cycle_is_legal() {
        assert!(validate_transition(FormState::Editing, FormState::Submitting).is_ok());
        assert!(validate_transition(FormState::Submitting, FormState::Success).is_ok());
        assert!(validate_transition(FormState::Success, FormState::Editing).is_ok());
        assert!(validate_transition(FormState::Submitting, FormState::Editing).is_ok());
    }

    #[test]
    fn no_reentry_while_success_or_submitting() {
        for from in [FormState::Submitting, FormState::Success] {
            let err = validate_transition(from, FormState::Submitting).unwrap_err();
            assert!(matches!(err, OrderError::IllegalTransition { to: FormState::Submitting, .. }));
        }
        assert!(validate_transition(FormState::Editing, FormState::Success).is_err());
    }

    proptest! {
        #[test]
        fn prop_validate_matches_table(from in state(), to in state()) {
            let listed = allowed_transitions(from).contains(&to);
            prop_assert_eq!(validate_transition(from, to).is_ok(), listed);
        }

        #[test]
        fn prop_no_self_loops(s in state()) {
            prop_assert!(validate_transition(s, s).is_err());
        }
    }
}
