//! HTTP utilities
//!
//! Percent-encoding for request payloads.

pub mod escape;

pub use escape::{encode_component, encode_pairs};
