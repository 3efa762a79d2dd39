//! Error types for the wellness booking core.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("Unlock denied: {0}")]
    Unlock(#[from] UnlockDenied),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Fallback error text shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// A create-booking or update-profile call that did not succeed.
///
/// Every non-2xx response is treated uniformly as a failure; there is no
/// retry logic anywhere in the crate — recovery is always user-initiated.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionError {
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("(no message)"))]
    Http { status: u16, message: Option<String> },

    #[error("Request failed: {0}")]
    Network(String),
}

impl SubmissionError {
    /// The text surfaced to the user: the server's own message verbatim when
    /// present, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http {
                message: Some(msg), ..
            } if !msg.is_empty() => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Why a profile unlock attempt was rejected.
///
/// The unlock gate is a UX affordance, not an authentication mechanism —
/// the code is a client-embedded literal with no server-side enforcement,
/// so these are interaction outcomes rather than security events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnlockDenied {
    #[error("Incorrect code. Attempt {attempt} of {max}.")]
    IncorrectCode { attempt: u8, max: u8 },

    #[error("Too many attempts. Press and hold the photo again to retry.")]
    TooManyAttempts,

    #[error("Press and hold the photo to unlock editing.")]
    GestureRequired,
}

/// Daily-content rotation errors.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Rotation list {0} must not be empty")]
    EmptyList(&'static str),
}

/// Local storage errors (avatar reference file).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_with_message_surfaces_it_verbatim() {
        let err = SubmissionError::Http {
            status: 500,
            message: Some("db down".to_string()),
        };
        assert_eq!(err.user_message(), "db down");
    }

    #[test]
    fn http_error_without_message_falls_back_to_generic() {
        let err = SubmissionError::Http {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);

        let err = SubmissionError::Http {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn network_error_falls_back_to_generic() {
        let err = SubmissionError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn unlock_denied_messages() {
        let err = UnlockDenied::IncorrectCode { attempt: 2, max: 3 };
        assert_eq!(err.to_string(), "Incorrect code. Attempt 2 of 3.");
        assert!(
            UnlockDenied::TooManyAttempts
                .to_string()
                .contains("Press and hold")
        );
    }
}
