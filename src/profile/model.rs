//! Consultant profile data model.

use serde::{Deserialize, Serialize};

/// The consultant's editable contact details.
///
/// This is both the GET /api/consultant response body and the
/// PUT /api/consultant request body. Identity is server-side only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantProfile {
    pub email: String,
    /// Free-form phone number; absent when never set.
    #[serde(default)]
    pub phone: Option<String>,
}

impl ConsultantProfile {
    pub fn new(email: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            email: email.into(),
            phone,
        }
    }
}
