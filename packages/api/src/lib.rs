//! Fetchkit public API
//!
//! Fluent request builder that delegates request validation and payload
//! encoding to a pluggable server strategy, then hands the request to a
//! transport.
//!
//! ```no_run
//! use fetchkit::AuthMode;
//!
//! # async fn login() -> fetchkit::Result<()> {
//! let response = fetchkit::rest()
//!     .domain("http://127.0.0.1:8080")
//!     .path("/login")
//!     .content_type(fetchkit::URL_ENCODED)
//!     .login_mode(AuthMode::Standard)
//!     .username("alice")
//!     .password("secret")
//!     .post()?
//!     .await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::sync::{Arc, OnceLock};

pub mod builder;

pub use builder::core::{ContentType, FetchBuilder, JSON, URL_ENCODED};

pub use fetchkit_client::{
    AuthMode, ConfigResult, ConfigurationError, Credentials, Error, HeaderOptions, HttpResponse,
    HyperTransport, Kind, PendingResponse, RequestBody, RequestConfiguration, RequestOptions,
    RequestTarget, Result, ServerStrategy, StandardRest, Transport, TransportConfig,
};

pub use http::Method;

/// Process-wide default transport, created on first use
static GLOBAL_TRANSPORT: OnceLock<Arc<HyperTransport>> = OnceLock::new();

fn global_transport() -> Arc<dyn Transport> {
    GLOBAL_TRANSPORT
        .get_or_init(|| Arc::new(HyperTransport::new()))
        .clone()
}

/// Main entry point providing static builder constructors
pub struct Fetch;

impl Fetch {
    /// Builder for a standard REST backend on the default transport
    #[must_use]
    pub fn rest() -> FetchBuilder {
        rest()
    }

    /// Builder for a custom strategy on the default transport
    #[must_use]
    pub fn with_strategy(strategy: Arc<dyn ServerStrategy>) -> FetchBuilder {
        FetchBuilder::new(strategy, global_transport())
    }

    /// Builder for a standard REST backend on a custom transport
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> FetchBuilder {
        FetchBuilder::rest(transport)
    }
}

/// Builder for a standard REST backend on the default transport
///
/// Shorthand for `FetchBuilder::rest` with a shared `HyperTransport`.
#[must_use]
pub fn rest() -> FetchBuilder {
    FetchBuilder::rest(global_transport())
}
