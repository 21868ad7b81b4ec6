//! Registration form model.
//!
//! `FormModel` owns the single `SubmissionState` of a form instance together
//! with its field values and transient flags. Every method is synchronous;
//! the controller drives the asynchronous parts around it.

use serde::{Deserialize, Serialize};

use crate::error::{ShareError, StoreError, SubmitError};
use crate::record::LeadRecord;
use crate::schema::{self, Field, LeadCandidate, ValidationErrors};
use crate::state::{SubmissionState, SUBMISSION_ERROR_MESSAGE};

/// Submit button label.
pub const SUBMIT_LABEL: &str = "¡Quiero mi Acceso Anticipado!";

/// Submit button label while the write is in flight.
pub const SUBMITTING_LABEL: &str = "Registrando...";

/// Share button label.
pub const SHARE_LABEL: &str = "Compartir con tus amigos";

/// Acknowledgement shown after the URL was copied.
pub const COPIED_NOTICE: &str = "URL copiada al portapapeles";

/// A single field change coming from the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Email(String),
    Name(String),
    Sport(String),
    AcceptTerms(bool),
}

impl FieldEdit {
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Email(_) => Field::Email,
            FieldEdit::Name(_) => Field::Name,
            FieldEdit::Sport(_) => Field::Sport,
            FieldEdit::AcceptTerms(_) => Field::AcceptTerms,
        }
    }
}

/// Identifies one arming of the auto-reset timer.
///
/// Only the most recently issued token can reset the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

/// Snapshot rendered by the presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub values: LeadCandidate,
    pub state: SubmissionState,
    pub errors: ValidationErrors,
    pub celebrating: bool,
    pub copied: bool,
}

impl FormView {
    /// Headline of the success panel.
    pub fn greeting(&self) -> String {
        match self.values.name.as_deref() {
            Some(name) if !name.is_empty() => format!("¡Genial, {}!", name),
            _ => "¡Genial!".to_string(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.state.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn email_error(&self) -> Option<&str> {
        self.errors.message(Field::Email)
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.state.error_message()
    }
}

#[derive(Debug, Default)]
pub struct FormModel {
    values: LeadCandidate,
    state: SubmissionState,
    errors: ValidationErrors,
    celebrating: bool,
    copied: bool,
    submit_attempted: bool,
    reset_generation: u64,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn values(&self) -> &LeadCandidate {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn snapshot(&self) -> FormView {
        FormView {
            values: self.values.clone(),
            state: self.state.clone(),
            errors: self.errors.clone(),
            celebrating: self.celebrating,
            copied: self.copied,
        }
    }

    /// Apply a field edit.
    ///
    /// Returns `false` when the form is showing its success panel. Once a
    /// submit has been rejected, email edits are re-validated immediately.
    pub fn edit(&mut self, edit: FieldEdit) -> bool {
        if !self.state.is_editable() {
            return false;
        }

        let field = edit.field();
        match edit {
            FieldEdit::Email(email) => self.values.email = email,
            FieldEdit::Name(name) => self.values.name = Some(name),
            FieldEdit::Sport(sport) => self.values.sport = Some(sport),
            FieldEdit::AcceptTerms(accept) => self.values.accept_terms = Some(accept),
        }

        if self.submit_attempted && field == Field::Email {
            self.errors.clear_field(Field::Email);
            if let Some(error) = schema::validate_email(&self.values.email) {
                self.errors.push(error);
            }
        }
        true
    }

    /// Validate and move to `Submitting`.
    ///
    /// When `candidate` is given it replaces the current values first. On
    /// success the returned record is the one to write.
    pub fn begin_submit(
        &mut self,
        candidate: Option<LeadCandidate>,
    ) -> Result<LeadRecord, SubmitError> {
        match self.state {
            SubmissionState::Submitting => return Err(SubmitError::InFlight),
            SubmissionState::Success => return Err(SubmitError::NotEditable),
            SubmissionState::Idle | SubmissionState::Error(_) => {}
        }

        if let Some(candidate) = candidate {
            self.values = candidate;
        }
        self.submit_attempted = true;

        match schema::validate(&self.values) {
            Ok(submission) => {
                self.errors = ValidationErrors::new();
                self.state = SubmissionState::Submitting;
                Ok(LeadRecord::from(submission))
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the write.
    ///
    /// Success starts the celebration and returns the token for the reset
    /// timer. Failure keeps the values and shows the generic banner.
    pub fn finish_submit(&mut self, outcome: &Result<(), StoreError>) -> Option<ResetToken> {
        if !self.state.is_submitting() {
            return None;
        }

        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Success;
                self.celebrating = true;
                self.copied = false;
                Some(self.arm_reset())
            }
            Err(_) => {
                self.state = SubmissionState::Error(SUBMISSION_ERROR_MESSAGE.to_string());
                None
            }
        }
    }

    /// Check that sharing is allowed.
    pub fn can_share(&self) -> Result<(), ShareError> {
        if self.state.is_success() {
            Ok(())
        } else {
            Err(ShareError::NotSucceeded)
        }
    }

    pub fn mark_copied(&mut self) {
        self.copied = true;
    }

    /// Issue a new reset token, invalidating every earlier one.
    pub fn arm_reset(&mut self) -> ResetToken {
        self.reset_generation += 1;
        ResetToken(self.reset_generation)
    }

    /// Invalidate any outstanding reset token.
    pub fn cancel_reset(&mut self) {
        self.reset_generation += 1;
    }

    /// Reset to a blank `Idle` form if `token` is still current.
    pub fn apply_reset(&mut self, token: ResetToken) -> bool {
        if token.0 != self.reset_generation || !self.state.is_success() {
            return false;
        }

        *self = Self {
            reset_generation: self.reset_generation,
            ..Self::default()
        };
        true
    }

    /// Consume the one-shot celebration flag.
    pub fn take_celebration(&mut self) -> bool {
        std::mem::take(&mut self.celebrating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::INVALID_EMAIL_MESSAGE;

    fn submitted(email: &str) -> FormModel {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Email(email.to_string()));
        model.begin_submit(None).unwrap();
        model
    }

    // === Submit Tests ===

    #[test]
    fn test_invalid_submit_keeps_state() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Email("nope".to_string()));

        let err = model.begin_submit(None).unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(model.state(), &SubmissionState::Idle);
        assert_eq!(model.snapshot().email_error(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_valid_submit_moves_to_submitting() {
        let model = submitted("ana@example.com");

        assert!(model.state().is_submitting());
        let view = model.snapshot();
        assert_eq!(view.submit_label(), SUBMITTING_LABEL);
        assert!(view.submit_disabled());
    }

    #[test]
    fn test_submit_while_submitting_is_rejected() {
        let mut model = submitted("ana@example.com");
        assert!(matches!(model.begin_submit(None), Err(SubmitError::InFlight)));
    }

    #[test]
    fn test_submit_with_candidate_replaces_values() {
        let mut model = FormModel::new();
        let record = model
            .begin_submit(Some(LeadCandidate::with_email("a@b.com").name("Ana")))
            .unwrap();

        assert_eq!(record.name.as_deref(), Some("Ana"));
        assert_eq!(model.values().email, "a@b.com");
    }

    #[test]
    fn test_success_arms_reset_and_celebrates() {
        let mut model = submitted("ana@example.com");

        let token = model.finish_submit(&Ok(())).unwrap();

        assert!(model.state().is_success());
        assert!(model.take_celebration());
        assert!(!model.take_celebration());
        assert!(matches!(model.begin_submit(None), Err(SubmitError::NotEditable)));
        assert!(model.apply_reset(token));
        assert_eq!(model.state(), &SubmissionState::Idle);
        assert_eq!(model.values(), &LeadCandidate::default());
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut model = submitted("ana@example.com");
        model.edit(FieldEdit::Name("Ana".to_string()));

        let token = model.finish_submit(&Err(StoreError::Transport("down".to_string())));

        assert!(token.is_none());
        assert_eq!(
            model.state().error_message(),
            Some(SUBMISSION_ERROR_MESSAGE)
        );
        assert_eq!(model.values().email, "ana@example.com");
        assert_eq!(model.values().name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_error_state_survives_edits_and_allows_resubmit() {
        let mut model = submitted("ana@example.com");
        model.finish_submit(&Err(StoreError::Timeout(10)));

        assert!(model.edit(FieldEdit::Sport("Tenis".to_string())));
        assert!(model.state().error_message().is_some());

        let invalid = LeadCandidate::with_email("ana@example");
        assert!(matches!(model.begin_submit(Some(invalid)), Err(SubmitError::Invalid(_))));
        assert_eq!(model.snapshot().error_banner(), Some(SUBMISSION_ERROR_MESSAGE));
        assert_eq!(model.snapshot().email_error(), Some(INVALID_EMAIL_MESSAGE));

        assert!(model.edit(FieldEdit::Email("ana@example.com".to_string())));
        model.begin_submit(None).unwrap();
        assert!(model.state().is_submitting());
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut model = FormModel::new();
        assert!(model.finish_submit(&Ok(())).is_none());
        assert_eq!(model.state(), &SubmissionState::Idle);
    }

    // === Reset Tests ===

    #[test]
    fn test_stale_reset_token_is_ignored() {
        let mut model = submitted("ana@example.com");
        let first = model.finish_submit(&Ok(())).unwrap();
        let second = model.arm_reset();

        assert!(!model.apply_reset(first));
        assert!(model.state().is_success());
        assert!(model.apply_reset(second));
    }

    #[test]
    fn test_cancel_reset() {
        let mut model = submitted("ana@example.com");
        let token = model.finish_submit(&Ok(())).unwrap();

        model.cancel_reset();

        assert!(!model.apply_reset(token));
    }

    #[test]
    fn test_reset_outside_success_does_nothing() {
        let mut model = FormModel::new();
        let token = model.arm_reset();
        model.edit(FieldEdit::Email("keep@example.com".to_string()));

        assert!(!model.apply_reset(token));
        assert_eq!(model.values().email, "keep@example.com");
    }

    // === Edit Tests ===

    #[test]
    fn test_edit_revalidates_after_attempt() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Email("bad".to_string()));
        let _ = model.begin_submit(None);
        assert!(model.snapshot().email_error().is_some());

        model.edit(FieldEdit::Email("good@example.com".to_string()));
        assert!(model.snapshot().email_error().is_none());

        model.edit(FieldEdit::Email("bad-again".to_string()));
        assert_eq!(model.snapshot().email_error(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_edit_before_attempt_does_not_validate() {
        let mut model = FormModel::new();
        model.edit(FieldEdit::Email("bad".to_string()));
        assert!(model.errors().is_empty());
    }

    #[test]
    fn test_edit_rejected_in_success() {
        let mut model = submitted("ana@example.com");
        model.finish_submit(&Ok(()));

        assert!(!model.edit(FieldEdit::Name("Other".to_string())));
    }

    // === Share Tests ===

    #[test]
    fn test_share_requires_success() {
        let mut model = FormModel::new();
        assert_eq!(model.can_share(), Err(ShareError::NotSucceeded));

        model.edit(FieldEdit::Email("ana@example.com".to_string()));
        model.begin_submit(None).unwrap();
        model.finish_submit(&Ok(()));
        assert!(model.can_share().is_ok());
    }

    // === View Tests ===

    #[test]
    fn test_greeting() {
        let mut view = FormView::default();
        assert_eq!(view.greeting(), "¡Genial!");

        view.values.name = Some(String::new());
        assert_eq!(view.greeting(), "¡Genial!");

        view.values.name = Some("Ana".to_string());
        assert_eq!(view.greeting(), "¡Genial, Ana!");
    }

    #[test]
    fn test_idle_labels() {
        let view = FormView::default();
        assert_eq!(view.submit_label(), SUBMIT_LABEL);
        assert!(!view.submit_disabled());
        assert!(view.error_banner().is_none());
    }
}
