//! Fetchkit client prelude
//!
//! The types a builder, a custom strategy or a custom transport needs.

pub use crate::auth::AuthMode;
pub use crate::config::{
    ConfigResult, ConfigurationError, Credentials, HeaderOptions, RequestBody,
    RequestConfiguration, RequestOptions, TransportConfig,
};
pub use crate::error::{Error, Kind, Result};
pub use crate::strategy::{RequestTarget, ServerStrategy, StandardRest};
pub use crate::transport::{HttpResponse, HyperTransport, PendingResponse, Transport};

pub use ::http::{HeaderMap, Method, StatusCode};
