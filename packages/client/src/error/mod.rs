pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::TimedOut;
pub use types::{Error, Inner, Kind, Result};

pub use crate::config::validation::ConfigurationError;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
