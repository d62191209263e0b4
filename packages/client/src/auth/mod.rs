pub mod auth_mode;

pub use auth_mode::{AuthMode, UnknownAuthMode};
