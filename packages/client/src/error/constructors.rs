use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a failed request dispatch.
pub fn request<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Request).with(e.into())
}

/// Creates an `Error` for a response body read failure.
pub fn body<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Body).with(e.into())
}

/// Creates an `Error` for a local file fetch failure.
pub fn file<E: Into<BoxError>>(e: E, path: &str) -> Error {
    Error::new(Kind::File).with(e.into()).with_url(path)
}

/// Creates an `Error` for an exchange that exceeded its deadline.
pub fn timeout(url: &str) -> Error {
    Error::new(Kind::Timeout)
        .with(super::helpers::TimedOut)
        .with_url(url)
}
