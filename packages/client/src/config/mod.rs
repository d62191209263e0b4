//! Request and transport configuration
//!
//! `RequestConfiguration` is the record a builder accumulates and a server
//! strategy inspects. `TransportConfig` tunes the bundled hyper transport.

pub mod request;
pub mod transport;
pub mod validation;

pub use request::{Credentials, HeaderOptions, RequestBody, RequestConfiguration, RequestOptions};
pub use transport::TransportConfig;
pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError};
