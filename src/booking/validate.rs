//! Field validation for booking drafts and profile edits.
//!
//! Each field is validated independently so the form can show per-field
//! error text. No validation error ever reaches the network layer — a
//! draft with any invalid field is never submitted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::model::{BookingDraft, BookingField, TimeSlot};

/// Syntactic email check: one `@`, no whitespace, a dot in the domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Per-field validation errors for a booking draft.
///
/// `None` means the field is valid. The draft is submittable only when
/// every field is `None` simultaneously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl FieldErrors {
    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.date.is_none() && self.time.is_none()
    }

    /// Error text for a single field, if any.
    pub fn get(&self, field: BookingField) -> Option<&str> {
        match field {
            BookingField::Name => self.name.as_deref(),
            BookingField::Email => self.email.as_deref(),
            BookingField::Date => self.date.as_deref(),
            BookingField::Time => self.time.as_deref(),
        }
    }

    /// The first error in field order — used where only one message fits,
    /// e.g. the server's 400 response body.
    pub fn first_message(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .or(self.date.as_deref())
            .or(self.time.as_deref())
    }
}

/// Validate every field of a booking draft independently.
pub fn validate_draft(draft: &BookingDraft) -> FieldErrors {
    FieldErrors {
        name: name_error(&draft.name),
        email: email_error(&draft.email),
        date: date_error(&draft.date),
        time: time_error(&draft.time),
    }
}

fn name_error(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        Some("Name is required".to_string())
    } else {
        None
    }
}

/// Syntactic email validation, shared with the consultant profile form.
pub fn email_error(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !EMAIL_RE.is_match(email) {
        Some("Enter a valid email address".to_string())
    } else {
        None
    }
}

fn date_error(date: &str) -> Option<String> {
    if date.is_empty() {
        Some("Date is required".to_string())
    } else if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        Some("Date must be in YYYY-MM-DD format".to_string())
    } else {
        None
    }
}

fn time_error(time: &str) -> Option<String> {
    if time.is_empty() {
        Some("Select a preferred time".to_string())
    } else if time.parse::<TimeSlot>().is_err() {
        Some("Not an available time slot".to_string())
    } else {
        None
    }
}
