//! Consultation booking — draft model, validation, and submission workflow.

pub mod model;
pub mod validate;
pub mod workflow;

pub use model::{BookingDraft, BookingField, BookingRecord, TimeSlot};
pub use validate::{FieldErrors, validate_draft};
pub use workflow::{BookingService, BookingWorkflow, SubmitOutcome, WorkflowState};
