//! Booking submission workflow — the form's state machine.
//!
//! States: `Editing → Submitting → {Confirmed | Editing-with-error}`.
//! The workflow owns the draft exclusively for the lifetime of the screen;
//! all transitions happen on discrete user events or on the arrival of the
//! one awaited network response.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SubmissionError;

use super::model::{BookingDraft, BookingField, BookingRecord};
use super::validate::{FieldErrors, validate_draft};

/// The create/list booking collaborator injected into the workflow.
///
/// The workflow only observes success or failure of `create_booking`; the
/// server-assigned identity in the returned record is never stored.
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn create_booking(&self, draft: &BookingDraft)
    -> Result<BookingRecord, SubmissionError>;

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, SubmissionError>;
}

/// Where the form currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Fields are editable; submission is allowed once all fields validate.
    Editing,
    /// The create-booking call is in flight. Edits and re-submits are no-ops.
    Submitting,
    /// The thank-you screen. Only `reset()` leaves this state.
    Confirmed,
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Confirmed => "confirmed",
        };
        write!(f, "{s}")
    }
}

/// What a `submit()` call resulted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The booking was created; the workflow is now `Confirmed`.
    Confirmed,
    /// Validation failed; no network call was issued.
    Invalid(FieldErrors),
    /// The create call failed; the workflow is back in `Editing` with the
    /// draft intact and this message surfaced.
    Failed { message: String },
    /// Called outside `Editing` (already in flight or already confirmed).
    Ignored,
}

/// The booking form's state machine.
pub struct BookingWorkflow {
    service: Arc<dyn BookingService>,
    state: WorkflowState,
    draft: BookingDraft,
    error: Option<String>,
}

impl BookingWorkflow {
    /// Create a workflow in `Editing` with an empty draft.
    pub fn new(service: Arc<dyn BookingService>) -> Self {
        Self {
            service,
            state: WorkflowState::Editing,
            draft: BookingDraft::default(),
            error: None,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// The submission error currently surfaced to the user, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Per-field error text shown next to each field.
    pub fn field_errors(&self) -> FieldErrors {
        validate_draft(&self.draft)
    }

    /// Whether the submit button is enabled: editing, and every field valid.
    pub fn can_submit(&self) -> bool {
        self.state == WorkflowState::Editing && self.field_errors().is_empty()
    }

    /// Apply a field edit. Returns false (and leaves the draft untouched)
    /// outside `Editing`.
    pub fn update_field(&mut self, field: BookingField, value: impl Into<String>) -> bool {
        if self.state != WorkflowState::Editing {
            debug!(state = %self.state, %field, "Ignoring field edit outside Editing");
            return false;
        }
        self.draft.set(field, value);
        true
    }

    /// Submit the draft.
    ///
    /// Issues exactly one create-booking call, and only when every field
    /// passes validation. On failure the draft is preserved unmodified so
    /// the user can correct and retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state != WorkflowState::Editing {
            debug!(state = %self.state, "Ignoring re-entrant submit");
            return SubmitOutcome::Ignored;
        }

        let errors = self.field_errors();
        if !errors.is_empty() {
            debug!("Submit blocked by field validation");
            return SubmitOutcome::Invalid(errors);
        }

        self.state = WorkflowState::Submitting;
        self.error = None;

        match self.service.create_booking(&self.draft).await {
            Ok(record) => {
                info!(booking_id = record.id, date = %record.date, time = %record.time, "Booking confirmed");
                self.state = WorkflowState::Confirmed;
                self.draft = BookingDraft::default();
                SubmitOutcome::Confirmed
            }
            Err(err) => {
                let message = err.user_message();
                warn!(error = %err, "Booking submission failed");
                self.state = WorkflowState::Editing;
                self.error = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Leave the thank-you screen and start a fresh booking.
    ///
    /// Valid only from `Confirmed`; returns false otherwise.
    pub fn reset(&mut self) -> bool {
        if self.state != WorkflowState::Confirmed {
            debug!(state = %self.state, "Ignoring reset outside Confirmed");
            return false;
        }
        self.state = WorkflowState::Editing;
        self.draft = BookingDraft::default();
        self.error = None;
        true
    }
}
