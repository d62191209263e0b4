//! Server Strategy Trait - the contract every backend variant implements

use crate::config::{ConfigResult, RequestBody, RequestConfiguration};

/// Backend-specific request legality rules and payload encoding
///
/// A builder is bound to exactly one strategy. Both operations are
/// synchronous and side-effect free, so a strategy can be shared across
/// builders and threads.
pub trait ServerStrategy: Send + Sync {
    /// Check that `configuration` describes a request this backend accepts
    ///
    /// # Errors
    ///
    /// Returns the `ConfigurationError` naming the first violated rule.
    fn validate(&self, configuration: &RequestConfiguration) -> ConfigResult<()>;

    /// Produce the wire body for `configuration`
    ///
    /// Must be independently callable: implementations validate on their
    /// own rather than trusting that `validate` already ran.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the configuration is rejected.
    fn build(&self, configuration: &RequestConfiguration) -> ConfigResult<RequestBody>;

    /// Strategy name for debugging/logging
    fn strategy_name(&self) -> &'static str {
        "custom"
    }
}
