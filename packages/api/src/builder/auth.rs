//! Login fields and credentials mode

use crate::builder::core::FetchBuilder;

impl FetchBuilder {
    /// Set the login mode code
    ///
    /// Accepts an [`AuthMode`](crate::AuthMode) or a raw code. Codes outside
    /// the registry are stored as-is and rejected by POST validation.
    #[must_use]
    pub fn login_mode(mut self, mode: impl Into<i64>) -> Self {
        self.configuration.login_mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn username(mut self, name: impl Into<String>) -> Self {
        self.configuration.username = Some(name.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.configuration.password = Some(password.into());
        self
    }

    /// Stop sending credentials with the request
    #[must_use]
    pub fn disable_credentials(mut self) -> Self {
        self.configuration.options.credentials = None;
        self
    }
}
