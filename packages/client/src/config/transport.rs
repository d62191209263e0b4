//! Settings for the bundled hyper transport.

use std::time::Duration;

use super::validation::{ConfigDefaults, ConfigResult, ConfigValidator};

/// Transport tuning knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Upper bound on one complete exchange, body included
    pub timeout: Duration,
    /// Sent as `User-Agent` unless the request carries its own
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: ConfigDefaults::DEFAULT_TIMEOUT,
            user_agent: ConfigDefaults::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl TransportConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the transport settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if the timeout is zero
    /// or longer than one hour.
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_timeout(self.timeout, "timeout")
    }
}
