//! Configuration errors, validation helpers and defaults.

use std::time::Duration;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Rules a request configuration or transport configuration can violate.
///
/// Raised synchronously, before any transport call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing url: domain, path and file are all undefined")]
    MissingUrl,

    #[error("domain/path/file is undefined")]
    MissingTarget,

    #[error("invalid request url: domain and path must both be set")]
    IncompleteUrl,

    #[error("sending a server request and reading a file at the same time is not possible")]
    ConflictingTarget,

    #[error("undefined request method: {}", .0.as_deref().unwrap_or("<none>"))]
    UndefinedMethod(Option<String>),

    #[error("invalid login mode: {}", .0.map_or_else(|| "<none>".to_string(), |code| code.to_string()))]
    InvalidLoginMode(Option<i64>),

    #[error("missing username")]
    MissingUsername,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("invalid timeout value: {0}")]
    InvalidTimeout(String),
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate timeout duration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if:
    /// - The timeout duration is zero
    /// - The timeout duration exceeds 1 hour (3600 seconds)
    pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot be zero"
            )));
        }

        if timeout.as_secs() > 3600 {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot exceed 1 hour"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_USER_AGENT: &'static str = "fetchkit/0.1";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_bounds() {
        assert!(ConfigValidator::validate_timeout(Duration::from_secs(5), "timeout").is_ok());
        assert_eq!(
            ConfigValidator::validate_timeout(Duration::ZERO, "timeout"),
            Err(ConfigurationError::InvalidTimeout(
                "timeout cannot be zero".to_string()
            ))
        );
        assert!(ConfigValidator::validate_timeout(Duration::from_secs(3601), "timeout").is_err());
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            ConfigurationError::UndefinedMethod(Some("PATCH".into())).to_string(),
            "undefined request method: PATCH"
        );
        assert_eq!(
            ConfigurationError::UndefinedMethod(None).to_string(),
            "undefined request method: <none>"
        );
        assert_eq!(
            ConfigurationError::InvalidLoginMode(Some(7)).to_string(),
            "invalid login mode: 7"
        );
    }
}
