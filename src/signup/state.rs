use std::rc::Rc;

use yew::Reducible;

use crate::signup::delivery::SignupRequest;
use crate::signup::validate;

/// Lifecycle of one signup attempt. `Idle` is initial; `Submitted` is left
/// again through `reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Submitted,
}

/// Shown when the delivery collaborator fails. The source this site replaces
/// swallowed that failure entirely and dropped the user back on a pristine
/// form; surfacing a retry hint is deliberate.
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// The form's entire state. Owned by the component instance and mutated only
/// through the methods below (dispatched as [`FormAction`]s), never from a
/// keystroke-time validator.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phase: Phase,
    /// Set only by a failed validation attempt, cleared by a passing one.
    pub field_error: Option<String>,
    /// Set only by a failed delivery, cleared on the next attempt and reset.
    pub submit_error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phase: Phase::Idle,
            field_error: None,
            submit_error: None,
        }
    }

    pub fn edit_name(&mut self, value: String) {
        if self.phase == Phase::Submitted {
            return;
        }
        self.name = value;
    }

    pub fn edit_email(&mut self, value: String) {
        if self.phase == Phase::Submitted {
            return;
        }
        self.email = value;
    }

    /// One submit attempt: validate, then either record the error or move to
    /// `Submitting`. A no-op unless the form is idle, so a second submit
    /// while one is in flight can never start another delivery.
    pub fn submit(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.submit_error = None;
        match validate::validate_email(&self.email) {
            Ok(()) => {
                self.field_error = None;
                self.phase = Phase::Submitting;
            }
            Err(error) => {
                self.field_error = Some(error.to_string());
            }
        }
    }

    /// Payload for the delivery collaborator. Meaningful once `submit` has
    /// accepted the fields; an empty name is treated as absent.
    pub fn request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            name: if self.name.is_empty() {
                None
            } else {
                Some(self.name.clone())
            },
        }
    }

    /// Delivery succeeded: show the thank-you view with both fields cleared
    /// for the next entry.
    pub fn finish(&mut self) {
        if self.phase != Phase::Submitting {
            return;
        }
        self.name.clear();
        self.email.clear();
        self.field_error = None;
        self.submit_error = None;
        self.phase = Phase::Submitted;
    }

    /// Delivery failed: back to an editable form, fields kept, retry message
    /// shown.
    pub fn fail(&mut self) {
        if self.phase != Phase::Submitting {
            return;
        }
        self.phase = Phase::Idle;
        self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
    }

    /// "Submit another email" from the thank-you view.
    pub fn reset(&mut self) {
        if self.phase != Phase::Submitted {
            return;
        }
        *self = Self::new();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// The enumerated operations; everything the component can do to its state.
pub enum FormAction {
    EditName(String),
    EditEmail(String),
    Submit,
    DeliverySucceeded,
    DeliveryFailed,
    Reset,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::EditName(value) => next.edit_name(value),
            FormAction::EditEmail(value) => next.edit_email(value),
            FormAction::Submit => next.submit(),
            FormAction::DeliverySucceeded => next.finish(),
            FormAction::DeliveryFailed => next.fail(),
            FormAction::Reset => next.reset(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filled(email: &str, name: &str) -> FormState {
        let mut state = FormState::new();
        state.edit_email(email.to_string());
        state.edit_name(name.to_string());
        state
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = FormState::new();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.name, "");
        assert_eq!(state.email, "");
        assert_eq!(state.field_error, None);
        assert_eq!(state.submit_error, None);
    }

    #[test]
    fn submit_without_email_sets_required_error_and_stays_idle() {
        let mut state = FormState::new();
        state.submit();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.field_error.as_deref(), Some("Email is required"));
    }

    #[rstest]
    #[case("user@domain")]
    #[case("user@domain.c")]
    fn submit_with_malformed_email_sets_format_error_and_stays_idle(#[case] email: &str) {
        let mut state = filled(email, "");
        state.submit();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.field_error.as_deref(), Some("Invalid email address"));
    }

    #[rstest]
    #[case("user@example.com")]
    #[case("user+tag@example.org")]
    #[case("user@example.co.uk")]
    fn submit_with_valid_email_moves_to_submitting(#[case] email: &str) {
        let mut state = filled(email, "");
        state.submit();
        assert_eq!(state.phase, Phase::Submitting);
        assert_eq!(state.field_error, None);
    }

    #[rstest]
    #[case("")]
    #[case("John Doe")]
    #[case("  spaced out  ")]
    #[case("🤖")]
    fn name_never_affects_validation(#[case] name: &str) {
        let mut valid = filled("user@example.com", name);
        valid.submit();
        assert_eq!(valid.phase, Phase::Submitting);
        assert_eq!(valid.field_error, None);

        let mut invalid = filled("user@domain", name);
        invalid.submit();
        assert_eq!(invalid.phase, Phase::Idle);
        assert_eq!(invalid.field_error.as_deref(), Some("Invalid email address"));
    }

    #[test]
    fn revalidating_the_same_bad_email_yields_the_same_single_error() {
        let mut state = filled("user@domain", "");
        state.submit();
        let first = state.field_error.clone();
        state.submit();
        assert_eq!(state.field_error, first);
        assert_eq!(state.field_error.as_deref(), Some("Invalid email address"));
    }

    #[test]
    fn passing_validation_clears_an_earlier_error() {
        let mut state = filled("user@domain", "");
        state.submit();
        assert!(state.field_error.is_some());
        state.edit_email("user@example.com".to_string());
        state.submit();
        assert_eq!(state.phase, Phase::Submitting);
        assert_eq!(state.field_error, None);
    }

    #[test]
    fn editing_never_touches_errors() {
        let mut state = filled("user@domain", "");
        state.submit();
        state.edit_email("user@example.com".to_string());
        assert_eq!(state.field_error.as_deref(), Some("Invalid email address"));
    }

    #[test]
    fn no_second_submission_while_one_is_in_flight() {
        let mut state = filled("user@example.com", "Jane");
        state.submit();
        assert_eq!(state.phase, Phase::Submitting);

        let snapshot = state.clone();
        state.submit();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn finish_clears_fields_and_errors() {
        let mut state = filled("user@example.com", "Jane");
        state.submit();
        state.finish();
        assert_eq!(state.phase, Phase::Submitted);
        assert_eq!(state.name, "");
        assert_eq!(state.email, "");
        assert_eq!(state.field_error, None);
        assert_eq!(state.submit_error, None);
    }

    #[test]
    fn fail_returns_to_idle_with_retry_message_and_keeps_fields() {
        let mut state = filled("user@example.com", "Jane");
        state.submit();
        state.fail();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.submit_error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
        assert_eq!(state.email, "user@example.com");
        assert_eq!(state.name, "Jane");
    }

    #[test]
    fn next_attempt_clears_the_retry_message() {
        let mut state = filled("user@example.com", "");
        state.submit();
        state.fail();
        assert!(state.submit_error.is_some());
        state.submit();
        assert_eq!(state.phase, Phase::Submitting);
        assert_eq!(state.submit_error, None);
    }

    #[test]
    fn reset_leaves_submitted_for_a_fresh_idle_form() {
        let mut state = filled("user@example.com", "Jane");
        state.submit();
        state.finish();
        state.reset();
        assert_eq!(state, FormState::new());
    }

    #[test]
    fn reset_is_a_noop_outside_submitted() {
        let mut state = filled("user@domain", "Jane");
        state.submit();
        let snapshot = state.clone();
        state.reset();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn finish_and_fail_require_an_inflight_submission() {
        let mut state = filled("user@example.com", "");
        let snapshot = state.clone();
        state.finish();
        assert_eq!(state, snapshot);
        state.fail();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn edits_after_submitted_keep_the_cleared_fields() {
        let mut state = filled("user@example.com", "");
        state.submit();
        state.finish();
        state.edit_email("typed@after.success".to_string());
        state.edit_name("ghost".to_string());
        assert_eq!(state.email, "");
        assert_eq!(state.name, "");
    }

    #[test]
    fn request_treats_empty_name_as_absent() {
        let mut state = filled("user@example.com", "");
        state.submit();
        assert_eq!(state.request().name, None);

        let mut named = filled("user@example.com", "Jane");
        named.submit();
        assert_eq!(named.request().name.as_deref(), Some("Jane"));
        assert_eq!(named.request().email, "user@example.com");
    }

    #[test]
    fn actions_map_to_the_enumerated_operations() {
        let state = Rc::new(FormState::new());
        let state = state.reduce(FormAction::EditEmail("user@example.com".to_string()));
        let state = state.reduce(FormAction::EditName("Jane".to_string()));
        let state = state.reduce(FormAction::Submit);
        assert_eq!(state.phase, Phase::Submitting);

        let failed = Rc::clone(&state).reduce(FormAction::DeliveryFailed);
        assert_eq!(failed.phase, Phase::Idle);
        assert_eq!(failed.submit_error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));

        let done = state.reduce(FormAction::DeliverySucceeded);
        assert_eq!(done.phase, Phase::Submitted);
        let again = done.reduce(FormAction::Reset);
        assert_eq!(*again, FormState::new());
    }
}
