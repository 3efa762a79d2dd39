//! Service configuration, read from the environment.

use crate::booking::validate::email_error;
use crate::error::ConfigError;

/// Configuration for the REST service binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the API listens on.
    pub port: u16,
    /// Seed value for the consultant row.
    pub consultant_email: String,
    /// Seed phone for the consultant row, if any.
    pub consultant_phone: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            consultant_email: "rithanya@wellness.example".to_string(),
            consultant_phone: None,
        }
    }
}

impl AppConfig {
    /// Build the config from `WELLNESS_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match std::env::var("WELLNESS_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "WELLNESS_PORT".to_string(),
                message: format!("not a port number: {raw}"),
            })?,
            Err(_) => defaults.port,
        };

        let consultant_email =
            std::env::var("WELLNESS_CONSULTANT_EMAIL").unwrap_or(defaults.consultant_email);
        if let Some(message) = email_error(&consultant_email) {
            return Err(ConfigError::InvalidValue {
                key: "WELLNESS_CONSULTANT_EMAIL".to_string(),
                message,
            });
        }

        let consultant_phone = std::env::var("WELLNESS_CONSULTANT_PHONE")
            .ok()
            .filter(|p| !p.is_empty());

        Ok(Self {
            port,
            consultant_email,
            consultant_phone,
        })
    }
}
