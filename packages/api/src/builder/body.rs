//! Caller-supplied request bodies
//!
//! A body set here is never replaced by the strategy's build step.

use bytes::Bytes;
use fetchkit_client::{ConfigurationError, RequestBody};
use serde::Serialize;

use crate::builder::core::FetchBuilder;

impl FetchBuilder {
    /// Set an already prepared request body
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.configuration.options.body = Some(body.into());
        self
    }

    /// Set raw bytes as request body
    #[must_use]
    pub fn raw_body(self, bytes: Vec<u8>) -> Self {
        if self.debug_enabled {
            log::debug!("FetchBuilder: set raw request body ({} bytes)", bytes.len());
        }
        self.body(Bytes::from(bytes))
    }

    /// Serialize `value` as JSON and use it as the request body
    ///
    /// Headers are left untouched; pair with `.content_type(JSON)`.
    /// A serialization failure is reported by `execute`.
    #[must_use]
    pub fn json_body<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(json) => self.body(json),
            Err(e) => {
                log::warn!("FetchBuilder: JSON body serialization failed: {e}");
                self.defer_error(ConfigurationError::InvalidBody(e.to_string()));
                self
            }
        }
    }

    /// Serialize `value` as `application/x-www-form-urlencoded` and use it
    /// as the request body
    ///
    /// A serialization failure is reported by `execute`.
    #[must_use]
    pub fn form_body<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        match serde_urlencoded::to_string(value) {
            Ok(form) => self.body(form),
            Err(e) => {
                log::warn!("FetchBuilder: form body serialization failed: {e}");
                self.defer_error(ConfigurationError::InvalidBody(e.to_string()));
                self
            }
        }
    }
}
