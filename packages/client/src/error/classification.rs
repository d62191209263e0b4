use std::error::Error as StdError;

use super::helpers::TimedOut;
use super::types::{Error, Kind};
use crate::config::validation::ConfigurationError;

impl Error {
    /// Returns true if the request was rejected before reaching the transport.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self.inner.kind, Kind::Configuration(_))
    }

    /// The configuration rule that was violated, if this is a configuration error.
    #[must_use]
    pub fn configuration_error(&self) -> Option<&ConfigurationError> {
        match &self.inner.kind {
            Kind::Configuration(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if the error came from the transport collaborator.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !self.is_configuration()
    }

    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        if matches!(self.inner.kind, Kind::Timeout) {
            return true;
        }

        let mut source = self.source();
        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the error came from reading a local file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self.inner.kind, Kind::File)
    }
}
