//! Header option setters
//!
//! `add_header_option` and `content_type` each replace the whole header map
//! with a single entry; chaining them keeps only the last one.
//! `merge_header` is the additive alternative.

use fetchkit_client::HeaderOptions;

use crate::builder::core::FetchBuilder;

impl FetchBuilder {
    /// Replace all header options with the single header `name: value`
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use fetchkit::{FetchBuilder, HyperTransport};
    ///
    /// let builder = FetchBuilder::rest(Arc::new(HyperTransport::new()))
    ///     .add_header_option("X-Trace", "1")
    ///     .add_header_option("Authorization", "Bearer t");
    ///
    /// let headers = builder.configuration().options.headers.as_ref().unwrap();
    /// assert_eq!(headers.len(), 1);
    /// assert_eq!(headers["Authorization"], "Bearer t");
    /// ```
    #[must_use]
    pub fn add_header_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = HeaderOptions::with_capacity(1);
        headers.insert(name.into(), value.into());
        self.configuration.options.headers = Some(headers);
        self
    }

    /// Replace all header options with a single `Content-Type` entry
    ///
    /// Accepts a string or a [`ContentType`](crate::ContentType).
    #[must_use]
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.add_header_option("Content-Type", content_type)
    }

    /// Insert `name: value`, keeping header options already set
    #[must_use]
    pub fn merge_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.configuration
            .options
            .headers
            .get_or_insert_with(HeaderOptions::new)
            .insert(name.into(), value.into());
        self
    }
}
