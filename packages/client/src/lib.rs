//! # Fetchkit client
//!
//! Internals behind the `fetchkit` builder:
//!
//! - the [`RequestConfiguration`] record a builder accumulates
//! - the [`ServerStrategy`] contract that validates a configuration and
//!   encodes its body, with [`StandardRest`] as the reference variant
//! - the [`AuthMode`] registry of login flow codes
//! - the [`Transport`] boundary, with a hyper-backed [`HyperTransport`]
//!
//! ## Usage
//!
//! ```
//! use fetchkit_client::prelude::*;
//!
//! let mut configuration = RequestConfiguration::new();
//! configuration.domain = Some("https://api.test".into());
//! configuration.path = Some("/login".into());
//! configuration.options.method = Some("POST".into());
//! configuration.login_mode = Some(AuthMode::Standard.code());
//! configuration.username = Some("alice".into());
//! configuration.password = Some("secret".into());
//!
//! let body = StandardRest.build(&configuration).unwrap();
//! assert_eq!(body.as_text(), Some("loginMode=1&username=alice&password=secret"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod strategy;
pub mod transport;

pub mod prelude;

pub use crate::prelude::*;
