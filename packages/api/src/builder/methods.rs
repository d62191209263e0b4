//! HTTP method setter and terminal shortcuts

use fetchkit_client::{PendingResponse, Result};

use crate::builder::core::FetchBuilder;

impl FetchBuilder {
    /// Set the request method, stored verbatim
    ///
    /// Accepts a string or an `http::Method`. The strategy decides which
    /// methods are legal; the standard REST strategy knows `GET`, `POST`
    /// and `DELETE`.
    #[must_use]
    pub fn method(mut self, verb: impl AsRef<str>) -> Self {
        self.configuration.options.method = Some(verb.as_ref().to_string());
        self
    }

    /// Execute as a GET request
    ///
    /// # Errors
    ///
    /// See [`FetchBuilder::execute`].
    pub fn get(self) -> Result<PendingResponse> {
        self.method("GET").execute()
    }

    /// Execute as a POST request
    ///
    /// # Errors
    ///
    /// See [`FetchBuilder::execute`].
    pub fn post(self) -> Result<PendingResponse> {
        self.method("POST").execute()
    }

    /// Execute as a DELETE request
    ///
    /// # Errors
    ///
    /// See [`FetchBuilder::execute`].
    pub fn delete(self) -> Result<PendingResponse> {
        self.method("DELETE").execute()
    }
}
