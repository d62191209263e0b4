//! Server implementation strategies
//!
//! A strategy owns the rules for which request configurations a backend
//! accepts and how the request payload is serialized for it.

pub mod rest;
pub mod strategy_trait;
pub mod target;

pub use rest::StandardRest;
pub use strategy_trait::ServerStrategy;
pub use target::RequestTarget;
