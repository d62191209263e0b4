//! Fetch builder API modules
//!
//! Provides the fluent API for configuring requests and handing them to a
//! server strategy and transport.

pub mod auth;
pub mod body;
pub mod core;
pub mod headers;
pub mod methods;

pub use self::core::*;
