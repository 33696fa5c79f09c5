//! Explicit form lifecycle: editing, validating, submitting, closed.

use super::{FieldErrors, FormError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Draft data collected by a form.
///
/// Implementations check every field at once and either produce the
/// normalized output the entity model accepts or a [`FieldErrors`] map
/// covering all failed fields.
pub trait FormDraft {
    /// Normalized value handed to the entity model on submit.
    type Output;

    /// Validates the whole draft.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldErrors`] map naming every failed field.
    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

/// Lifecycle state of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Fields are being edited.
    Editing,
    /// The current draft passed validation and may be submitted.
    Validating,
    /// The validated output has been handed to the caller for persistence.
    Submitting,
    /// Submission completed or the form was cancelled.
    Closed,
}

impl FormState {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events that drive a [`FormSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    /// A field was changed.
    Edit,
    /// The draft was validated.
    Validate,
    /// Submission started.
    Submit,
    /// Persistence finished successfully.
    Complete,
    /// Persistence failed.
    Fail,
    /// The user abandoned the form.
    Cancel,
}

impl FormEvent {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Validate => "validate",
            Self::Submit => "submit",
            Self::Complete => "complete",
            Self::Fail => "fail",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form state machine over a draft.
///
/// Transitions:
///
/// | from                | event      | to                                 |
/// |---------------------|------------|------------------------------------|
/// | Editing, Validating | `edit`     | Editing                            |
/// | Editing, Validating | `validate` | Validating, or Editing with errors |
/// | Editing, Validating | `submit`   | Submitting, or Editing with errors |
/// | Submitting          | `complete` | Closed                             |
/// | Submitting          | `fail`     | Editing with errors                |
/// | any but Closed      | `cancel`   | Closed                             |
///
/// Every other combination is rejected with
/// [`FormError::InvalidTransition`] and leaves the session untouched. The
/// entity model is only written after `submit` hands out the validated
/// output, so cancelling never leaves partial writes behind.
///
/// # Examples
///
/// ```
/// use crmboard::form::{FieldErrors, FormDraft, FormSession, FormState};
///
/// #[derive(Default)]
/// struct Title(String);
///
/// impl FormDraft for Title {
///     type Output = String;
///
///     fn validate(&self) -> Result<String, FieldErrors> {
///         let mut errors = FieldErrors::new();
///         errors.check(self.0.trim().is_empty(), "title", "Title is required");
///         errors.into_result(self.0.trim().to_owned())
///     }
/// }
///
/// let mut form = FormSession::new(Title::default());
/// assert!(form.submit().is_err());
/// form.edit("title", |draft| draft.0 = " Launch ".to_owned()).unwrap();
/// assert_eq!(form.submit().unwrap(), "Launch");
/// form.complete().unwrap();
/// assert_eq!(form.state(), FormState::Closed);
/// ```
#[derive(Debug, Clone)]
pub struct FormSession<D> {
    draft: D,
    errors: FieldErrors,
    state: FormState,
}

impl<D: FormDraft> FormSession<D> {
    /// Opens a form in the editing state.
    #[must_use]
    pub const fn new(draft: D) -> Self {
        Self {
            draft,
            errors: FieldErrors::new(),
            state: FormState::Editing,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Returns the draft.
    #[must_use]
    pub const fn draft(&self) -> &D {
        &self.draft
    }

    /// Returns the field errors from the last validation.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Applies a change to one field and clears that field's error.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidTransition`] while submitting or closed.
    pub fn edit(&mut self, field: &str, change: impl FnOnce(&mut D)) -> Result<(), FormError> {
        self.expect_state(FormEvent::Edit, &[FormState::Editing, FormState::Validating])?;
        change(&mut self.draft);
        self.errors.clear_field(field);
        self.state = FormState::Editing;
        Ok(())
    }

    /// Validates the draft, recording the resulting field errors.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] with the failed fields, or
    /// [`FormError::InvalidTransition`] while submitting or closed.
    pub fn validate(&mut self) -> Result<(), FormError> {
        self.expect_state(
            FormEvent::Validate,
            &[FormState::Editing, FormState::Validating],
        )?;
        match self.draft.validate() {
            Ok(_) => {
                self.errors = FieldErrors::new();
                self.state = FormState::Validating;
                Ok(())
            }
            Err(errors) => {
                self.reject(errors.clone());
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Validates if needed and starts submission, handing out the validated
    /// output for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] when the draft fails validation, or
    /// [`FormError::InvalidTransition`] while submitting or closed.
    pub fn submit(&mut self) -> Result<D::Output, FormError> {
        self.expect_state(FormEvent::Submit, &[FormState::Editing, FormState::Validating])?;
        tracing::debug!(from = %self.state, "form submission started");
        match self.draft.validate() {
            Ok(output) => {
                self.errors = FieldErrors::new();
                self.state = FormState::Submitting;
                Ok(output)
            }
            Err(errors) => {
                self.reject(errors.clone());
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Marks the submission as persisted and closes the form.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidTransition`] unless submitting.
    pub fn complete(&mut self) -> Result<(), FormError> {
        self.expect_state(FormEvent::Complete, &[FormState::Submitting])?;
        self.state = FormState::Closed;
        Ok(())
    }

    /// Returns a failed submission to editing with the given errors.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidTransition`] unless submitting.
    pub fn fail(&mut self, errors: FieldErrors) -> Result<(), FormError> {
        self.expect_state(FormEvent::Fail, &[FormState::Submitting])?;
        self.reject(errors);
        Ok(())
    }

    /// Abandons the form without writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidTransition`] when already closed.
    pub fn cancel(&mut self) -> Result<(), FormError> {
        self.expect_state(
            FormEvent::Cancel,
            &[
                FormState::Editing,
                FormState::Validating,
                FormState::Submitting,
            ],
        )?;
        self.state = FormState::Closed;
        Ok(())
    }

    /// Consumes the session and returns the draft.
    #[must_use]
    pub fn into_draft(self) -> D {
        self.draft
    }

    fn reject(&mut self, errors: FieldErrors) {
        tracing::debug!(failed_fields = errors.len(), "form returned to editing");
        self.errors = errors;
        self.state = FormState::Editing;
    }

    fn expect_state(&self, event: FormEvent, allowed: &[FormState]) -> Result<(), FormError> {
        if allowed.contains(&self.state) {
            return Ok(());
        }
        Err(FormError::InvalidTransition {
            from: self.state,
            event,
        })
    }
}
