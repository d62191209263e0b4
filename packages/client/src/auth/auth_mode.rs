//! `AuthMode` - the closed set of login flow codes a server accepts.

use std::fmt;
use std::str::FromStr;

/// Named login mode codes
///
/// The numeric values are opaque sentinels; only their uniqueness matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum AuthMode {
    Standard = 1,
    Standard2 = 2,
    FunnyAuth = 12_345_678,
}

impl AuthMode {
    /// Every registered mode
    pub const ALL: [AuthMode; 3] = [AuthMode::Standard, AuthMode::Standard2, AuthMode::FunnyAuth];

    /// Frozen name to code mapping
    pub const REGISTRY: [(&'static str, i64); 3] = [
        ("STANDARD", AuthMode::Standard as i64),
        ("STANDARD2", AuthMode::Standard2 as i64),
        ("FUNNY_AUTH", AuthMode::FunnyAuth as i64),
    ];

    #[inline]
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AuthMode::Standard => "STANDARD",
            AuthMode::Standard2 => "STANDARD2",
            AuthMode::FunnyAuth => "FUNNY_AUTH",
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// True if `code` belongs to the registry
    #[must_use]
    pub fn is_registered(code: i64) -> bool {
        Self::from_code(code).is_some()
    }
}

impl From<AuthMode> for i64 {
    fn from(mode: AuthMode) -> Self {
        mode.code()
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown auth mode: {0}")]
pub struct UnknownAuthMode(pub String);

impl FromStr for AuthMode {
    type Err = UnknownAuthMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| UnknownAuthMode(s.to_string()))
    }
}
