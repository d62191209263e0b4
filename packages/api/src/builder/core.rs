//! Core `FetchBuilder` structure and execution
//!
//! Contains the builder struct, content type constants, target setters and
//! the terminal `execute` operation.

use std::fmt;
use std::sync::Arc;

use fetchkit_client::{
    ConfigResult, ConfigurationError, PendingResponse, RequestConfiguration, RequestTarget,
    Result, ServerStrategy, StandardRest, Transport,
};

/// `application/x-www-form-urlencoded`
pub const URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// `application/json`
pub const JSON: &str = "application/json";

/// Content type enumeration for use with [`FetchBuilder::content_type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// application/x-www-form-urlencoded content type
    UrlEncoded,
    /// application/json content type
    Json,
}

impl ContentType {
    /// Convert content type to string representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::UrlEncoded => URL_ENCODED,
            ContentType::Json => JSON,
        }
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.as_str().to_string()
    }
}

/// Where `execute` sends the request
enum Resolved {
    File(String),
    Server(String),
}

/// Fluent builder for one outgoing request
///
/// Setters store values verbatim and never fail; every rule is checked when
/// [`execute`](FetchBuilder::execute) runs. The builder is consumed by
/// execution, so a configuration is sent at most once.
pub struct FetchBuilder {
    pub(crate) strategy: Arc<dyn ServerStrategy>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) configuration: RequestConfiguration,
    /// First setter failure, reported by `execute`
    pub(crate) deferred_error: Option<ConfigurationError>,
    pub(crate) debug_enabled: bool,
}

impl FetchBuilder {
    /// Start building a request bound to one strategy and one transport
    #[must_use]
    pub fn new(strategy: Arc<dyn ServerStrategy>, transport: Arc<dyn Transport>) -> Self {
        Self {
            strategy,
            transport,
            configuration: RequestConfiguration::new(),
            deferred_error: None,
            debug_enabled: false,
        }
    }

    /// Start building a request for a standard REST backend
    #[must_use]
    pub fn rest(transport: Arc<dyn Transport>) -> Self {
        Self::new(Arc::new(StandardRest), transport)
    }

    /// Enable debug logging for this request
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Set the server's domain, e.g. `https://api.example.com`
    #[must_use]
    pub fn domain(mut self, url: impl Into<String>) -> Self {
        self.configuration.domain = Some(url.into());
        self
    }

    /// Set the endpoint path appended to the domain
    ///
    /// No separator is inserted, so the path should start with `/`.
    #[must_use]
    pub fn path(mut self, url: impl Into<String>) -> Self {
        self.configuration.path = Some(url.into());
        self
    }

    /// Fetch a local resource instead of calling a server
    #[must_use]
    pub fn file(mut self, path: impl Into<String>) -> Self {
        self.configuration.file = Some(path.into());
        self
    }

    /// The configuration accumulated so far
    #[must_use]
    pub fn configuration(&self) -> &RequestConfiguration {
        &self.configuration
    }

    pub(crate) fn defer_error(&mut self, error: ConfigurationError) {
        if self.deferred_error.is_none() {
            self.deferred_error = Some(error);
        }
    }

    fn resolve(&self) -> ConfigResult<Resolved> {
        let configuration = &self.configuration;

        if configuration.domain.is_none()
            && configuration.path.is_none()
            && configuration.file.is_none()
        {
            return Err(ConfigurationError::MissingUrl);
        }

        if configuration.file.is_some()
            && let RequestTarget::File(file) = RequestTarget::classify(configuration)?
        {
            return Ok(Resolved::File(file.to_string()));
        }

        Ok(Resolved::Server(format!(
            "{}{}",
            configuration.domain.as_deref().unwrap_or_default(),
            configuration.path.as_deref().unwrap_or_default()
        )))
    }

    /// Validate, encode and send the request
    ///
    /// File fetches skip the strategy and call the transport without
    /// options. Server requests are validated and built by the strategy,
    /// and the resulting body is stored in the options handed to the
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns a configuration error, before the transport is touched, if
    /// no target is set, the target is ambiguous, a setter failed, or the
    /// strategy rejects the configuration. Transport failures surface from
    /// the returned future.
    pub fn execute(mut self) -> Result<PendingResponse> {
        if let Some(error) = self.deferred_error.take() {
            return Err(error.into());
        }

        match self.resolve()? {
            Resolved::File(file) => {
                if self.debug_enabled {
                    log::debug!("FetchBuilder: FILE {file}");
                }
                Ok(self.transport.perform(&file, None))
            }
            Resolved::Server(url) => {
                self.strategy.validate(&self.configuration)?;
                let body = self.strategy.build(&self.configuration)?;

                if self.debug_enabled {
                    log::debug!(
                        "FetchBuilder: {} {url} via {} ({} body bytes)",
                        self.configuration.method().unwrap_or_default(),
                        self.strategy.strategy_name(),
                        body.as_bytes().len()
                    );
                }

                let mut options = self.configuration.options;
                options.body = Some(body);
                Ok(self.transport.perform(&url, Some(options)))
            }
        }
    }
}

impl fmt::Debug for FetchBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchBuilder")
            .field("strategy", &self.strategy.strategy_name())
            .field("configuration", &self.configuration)
            .field("deferred_error", &self.deferred_error)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}
