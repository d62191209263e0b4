use std::error::Error as StdError;
use std::fmt;

use crate::config::validation::ConfigurationError;

/// A Result alias where the Err case is `fetchkit_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors raised while building or sending a request.
pub struct Error {
    pub inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// The accumulated configuration was rejected before any transport call
    Configuration(ConfigurationError),
    /// The transport failed to send the request or receive the response head
    Request,
    /// Request or response timeout
    Timeout,
    /// Response body could not be read
    Body,
    /// Local file fetch failed
    File,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.inner.url.as_deref()
    }
}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Error::new(Kind::Configuration(err))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("fetchkit::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Configuration(err) => write!(f, "invalid request configuration: {err}")?,
            Kind::Request => f.write_str("error sending request")?,
            Kind::Timeout => f.write_str("request timeout")?,
            Kind::Body => f.write_str("error reading response body")?,
            Kind::File => f.write_str("error reading local file")?,
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " for {url}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.inner.kind {
            Kind::Configuration(err) => Some(err),
            _ => self
                .inner
                .source
                .as_ref()
                .map(|err| &**err as &(dyn StdError + 'static)),
        }
    }
}
