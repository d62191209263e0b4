//! `StandardRest` - the reference strategy for a plain REST login backend
//!
//! POST requests carry a form-encoded `loginMode` / `username` / `password`
//! triple. GET and DELETE carry no body and have no extra constraints.

use crate::auth::AuthMode;
use crate::config::{ConfigResult, ConfigurationError, RequestBody, RequestConfiguration};
use crate::http::escape::encode_pairs;
use crate::strategy::strategy_trait::ServerStrategy;
use crate::strategy::target::RequestTarget;

/// Standard REST server strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRest;

impl StandardRest {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn validate_get(_configuration: &RequestConfiguration) -> ConfigResult<()> {
        Ok(())
    }

    fn validate_delete(_configuration: &RequestConfiguration) -> ConfigResult<()> {
        Ok(())
    }

    // Password presence is deliberately left unchecked.
    fn validate_post(configuration: &RequestConfiguration) -> ConfigResult<()> {
        match configuration.login_mode {
            Some(code) if AuthMode::is_registered(code) => {}
            other => return Err(ConfigurationError::InvalidLoginMode(other)),
        }

        if configuration.username.is_none() {
            return Err(ConfigurationError::MissingUsername);
        }

        Ok(())
    }

    fn encode_login(configuration: &RequestConfiguration) -> String {
        let login_mode = configuration
            .login_mode
            .map(|code| code.to_string())
            .unwrap_or_default();

        encode_pairs([
            ("loginMode", login_mode.as_str()),
            ("username", configuration.username.as_deref().unwrap_or_default()),
            ("password", configuration.password.as_deref().unwrap_or_default()),
        ])
    }
}

impl ServerStrategy for StandardRest {
    fn validate(&self, configuration: &RequestConfiguration) -> ConfigResult<()> {
        RequestTarget::classify(configuration)?;

        match configuration.method() {
            Some("GET") => Self::validate_get(configuration),
            Some("POST") => Self::validate_post(configuration),
            Some("DELETE") => Self::validate_delete(configuration),
            other => Err(ConfigurationError::UndefinedMethod(other.map(str::to_string))),
        }
    }

    fn build(&self, configuration: &RequestConfiguration) -> ConfigResult<RequestBody> {
        if let Some(body) = &configuration.options.body {
            tracing::trace!("{}: keeping caller-supplied body", self.strategy_name());
            return Ok(body.clone());
        }

        self.validate(configuration)?;

        if configuration.method() != Some("POST") {
            return Ok(RequestBody::Empty);
        }

        Ok(RequestBody::Text(Self::encode_login(configuration)))
    }

    fn strategy_name(&self) -> &'static str {
        "standard-rest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(method: &str) -> RequestConfiguration {
        let mut configuration = RequestConfiguration {
            domain: Some("https://api.test".into()),
            path: Some("/login".into()),
            login_mode: Some(AuthMode::Standard.code()),
            username: Some("alice".into()),
            password: Some("secret".into()),
            ..RequestConfiguration::default()
        };
        configuration.options.method = Some(method.into());
        configuration
    }

    #[test]
    fn post_login_body() {
        let body = StandardRest.build(&login("POST")).unwrap();
        assert_eq!(
            body,
            RequestBody::Text("loginMode=1&username=alice&password=secret".into())
        );
    }

    #[test]
    fn post_values_are_component_encoded() {
        let mut configuration = login("POST");
        configuration.username = Some("al ice&co".into());
        configuration.password = Some("p=w+d".into());
        let body = StandardRest.build(&configuration).unwrap();
        assert_eq!(
            body.as_text(),
            Some("loginMode=1&username=al%20ice%26co&password=p%3Dw%2Bd")
        );
    }

    #[test]
    fn missing_password_encodes_empty() {
        let mut configuration = login("POST");
        configuration.password = None;
        assert!(StandardRest.validate(&configuration).is_ok());
        assert_eq!(
            StandardRest.build(&configuration).unwrap().as_text(),
            Some("loginMode=1&username=alice&password=")
        );
    }

    #[test]
    fn get_and_delete_have_empty_payload() {
        for method in ["GET", "DELETE"] {
            let configuration = login(method);
            assert!(StandardRest.validate(&configuration).is_ok());
            assert_eq!(StandardRest.build(&configuration), Ok(RequestBody::Empty));
        }
    }

    #[test]
    fn get_ignores_login_fields() {
        let mut configuration = login("GET");
        configuration.login_mode = Some(99);
        configuration.username = None;
        assert!(StandardRest.validate(&configuration).is_ok());
    }

    #[test]
    fn unknown_or_absent_method_is_rejected() {
        let configuration = login("PATCH");
        assert_eq!(
            StandardRest.validate(&configuration),
            Err(ConfigurationError::UndefinedMethod(Some("PATCH".into())))
        );

        let mut configuration = login("GET");
        configuration.options.method = None;
        assert_eq!(
            StandardRest.validate(&configuration),
            Err(ConfigurationError::UndefinedMethod(None))
        );

        // Method names are case-sensitive.
        assert!(StandardRest.validate(&login("post")).is_err());
    }

    #[test]
    fn post_rejects_unregistered_login_mode() {
        for mode in [None, Some(0), Some(3), Some(-1)] {
            let mut configuration = login("POST");
            configuration.login_mode = mode;
            configuration.username = None;
            assert_eq!(
                StandardRest.validate(&configuration),
                Err(ConfigurationError::InvalidLoginMode(mode))
            );
        }
    }

    #[test]
    fn post_requires_username() {
        let mut configuration = login("POST");
        configuration.username = None;
        assert_eq!(
            StandardRest.validate(&configuration),
            Err(ConfigurationError::MissingUsername)
        );
    }

    #[test]
    fn target_is_checked_before_method() {
        let mut configuration = login("PATCH");
        configuration.file = Some("/local/report.pdf".into());
        assert_eq!(
            StandardRest.validate(&configuration),
            Err(ConfigurationError::ConflictingTarget)
        );
    }

    #[test]
    fn caller_body_wins_even_when_invalid() {
        let mut configuration = login("PATCH");
        configuration.username = None;
        configuration.options.body = Some(RequestBody::from("{\"raw\":true}"));
        assert_eq!(
            StandardRest.build(&configuration),
            Ok(RequestBody::from("{\"raw\":true}"))
        );
    }

    #[test]
    fn build_revalidates_without_caller_body() {
        let mut configuration = login("POST");
        configuration.username = None;
        assert_eq!(
            StandardRest.build(&configuration),
            Err(ConfigurationError::MissingUsername)
        );
    }

    #[test]
    fn build_is_idempotent() {
        let configuration = login("POST");
        let first = StandardRest.build(&configuration).unwrap();
        let second = StandardRest.build(&configuration).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn all_registered_modes_pass() {
        for mode in AuthMode::ALL {
            let mut configuration = login("POST");
            configuration.login_mode = Some(mode.into());
            let body = StandardRest.build(&configuration).unwrap();
            assert!(
                body.as_text()
                    .unwrap()
                    .starts_with(&format!("loginMode={}&", mode.code()))
            );
        }
    }
}
