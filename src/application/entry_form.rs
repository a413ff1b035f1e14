//! Add-entry form state.
//!
//! Holds the draft being edited, the per-field validation messages and the
//! submission lifecycle. Only one submission may be in flight: while the
//! form is `Submitting`, edits and further submits are refused.

use std::fmt::Display;
use std::future::Future;

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::journal::{
    validate_submission, FieldErrors, Idea, ProblemFormData, ProblemSubmission,
};

/// Toast shown when the submission callback fails.
pub const SUBMIT_FAILED_TOAST: &str = "Failed to add problem. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Closed,
}

impl StateMachine for FormStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FormStatus::*;
        matches!(
            (self, target),
            (Editing, Submitting) | (Editing, Closed) | (Submitting, Editing) | (Submitting, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FormStatus::*;
        match self {
            Editing => vec![Submitting, Closed],
            Submitting => vec![Editing, Closed],
            Closed => vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("At least one idea must remain")]
    LastIdea,

    #[error("No idea at position {0}")]
    IdeaOutOfRange(usize),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("The form is closed")]
    Closed,

    #[error("Invalid submission: {0}")]
    Invalid(FieldErrors),

    #[error("Submission failed: {0}")]
    Rejected(String),

    #[error(transparent)]
    Transition(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    draft: ProblemSubmission,
    status: FormStatus,
    field_errors: FieldErrors,
    toast: Option<String>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryForm {
    /// Opens a form on a blank draft.
    pub fn new() -> Self {
        Self::with_draft(ProblemSubmission::blank())
    }

    pub fn with_draft(draft: ProblemSubmission) -> Self {
        Self {
            draft,
            status: FormStatus::Editing,
            field_errors: FieldErrors::new(),
            toast: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status != FormStatus::Closed
    }

    /// Mirrors the disabled state of the submit control.
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn draft(&self) -> &ProblemSubmission {
        &self.draft
    }

    /// Mutable access to the draft; refused unless the form is editable.
    pub fn draft_mut(&mut self) -> Result<&mut ProblemSubmission, FormError> {
        self.ensure_editing()?;
        Ok(&mut self.draft)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    /// Appends a blank idea block.
    pub fn add_idea(&mut self) -> Result<(), FormError> {
        self.ensure_editing()?;
        self.draft.ideas.push(Idea::default());
        Ok(())
    }

    /// Removes the idea at `index`. The last remaining idea cannot be removed.
    pub fn remove_idea(&mut self, index: usize) -> Result<Idea, FormError> {
        self.ensure_editing()?;
        if index >= self.draft.ideas.len() {
            return Err(FormError::IdeaOutOfRange(index));
        }
        if self.draft.ideas.len() == 1 {
            return Err(FormError::LastIdea);
        }
        Ok(self.draft.ideas.remove(index))
    }

    /// Closes the form without submitting.
    pub fn cancel(&mut self) -> Result<(), FormError> {
        self.ensure_editing()?;
        self.status = self.status.transition_to(FormStatus::Closed)?;
        Ok(())
    }

    /// Validates the draft and, when it passes, marks the form as submitting.
    ///
    /// On validation failure the form stays editable and the field errors
    /// are kept for display.
    pub fn begin_submit(&mut self) -> Result<ProblemFormData, FormError> {
        self.ensure_editing()?;

        match validate_submission(&self.draft) {
            Ok(data) => {
                self.status = self.status.transition_to(FormStatus::Submitting)?;
                self.field_errors = FieldErrors::new();
                self.toast = None;
                Ok(data)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "submission failed validation");
                self.field_errors = errors.clone();
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Completes an in-flight submission: closes on success, reopens for
    /// editing with a toast on failure.
    pub fn finish_submit(&mut self, succeeded: bool) -> Result<(), FormError> {
        if self.status != FormStatus::Submitting {
            return Err(FormError::Transition(ValidationError::invalid_format(
                "state_transition",
                format!("No submission in flight (form is {:?})", self.status),
            )));
        }

        if succeeded {
            self.status = self.status.transition_to(FormStatus::Closed)?;
        } else {
            self.status = self.status.transition_to(FormStatus::Editing)?;
            self.toast = Some(SUBMIT_FAILED_TOAST.to_string());
        }
        Ok(())
    }

    /// Runs a whole submission around `on_submit`.
    pub async fn submit<F, Fut, E>(&mut self, on_submit: F) -> Result<(), FormError>
    where
        F: FnOnce(ProblemFormData) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        let data = self.begin_submit()?;

        match on_submit(data).await {
            Ok(()) => self.finish_submit(true),
            Err(err) => {
                tracing::warn!("entry submission rejected: {}", err);
                self.finish_submit(false)?;
                Err(FormError::Rejected(err.to_string()))
            }
        }
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        match self.status {
            FormStatus::Editing => Ok(()),
            FormStatus::Submitting => Err(FormError::SubmissionInFlight),
            FormStatus::Closed => Err(FormError::Closed),
        }
    }
}
