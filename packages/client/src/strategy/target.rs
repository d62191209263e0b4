//! Request target classification
//!
//! A request addresses either a server (`domain` + `path`) or a local file,
//! never both and never neither.

use crate::config::{ConfigResult, ConfigurationError, RequestConfiguration};

/// Where a configuration points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTarget<'a> {
    Server { domain: &'a str, path: &'a str },
    File(&'a str),
}

/// Empty strings count as unset
fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|value| !value.is_empty())
}

impl<'a> RequestTarget<'a> {
    /// Classify the (domain, path, file) presence triple
    ///
    /// # Errors
    ///
    /// - `ConflictingTarget` if a file is combined with a domain or path
    /// - `MissingTarget` if nothing is set
    /// - `IncompleteUrl` if only one of domain and path is set
    pub fn classify(configuration: &'a RequestConfiguration) -> ConfigResult<Self> {
        let domain = present(configuration.domain.as_ref());
        let path = present(configuration.path.as_ref());
        let file = present(configuration.file.as_ref());

        match (domain, path, file) {
            (Some(domain), Some(path), None) => Ok(RequestTarget::Server { domain, path }),
            (None, None, Some(file)) => Ok(RequestTarget::File(file)),
            (None, None, None) => Err(ConfigurationError::MissingTarget),
            (Some(_), None, None) | (None, Some(_), None) => Err(ConfigurationError::IncompleteUrl),
            (_, _, Some(_)) => Err(ConfigurationError::ConflictingTarget),
        }
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, RequestTarget::File(_))
    }
}
