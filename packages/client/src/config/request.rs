//! The accumulated description of one pending request.
//!
//! Every field is optional and stored verbatim. Nothing here validates;
//! legality of a configuration shape is decided by a
//! [`ServerStrategy`](crate::strategy::ServerStrategy) at execution time.

use bytes::Bytes;

/// Header name to value map carried by [`RequestOptions`]
pub type HeaderOptions = hashbrown::HashMap<String, String>;

/// Whether credentials (cookies, authorization) accompany the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Credentials {
    /// Always send credentials
    #[default]
    Include,
    /// Only send credentials to the same origin
    SameOrigin,
    /// Never send credentials
    Omit,
}

impl Credentials {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Credentials::Include => "include",
            Credentials::SameOrigin => "same-origin",
            Credentials::Omit => "omit",
        }
    }
}

/// Wire payload of a request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    /// No body content
    #[default]
    Empty,
    /// UTF-8 text, e.g. an encoded form
    Text(String),
    /// Raw bytes
    Bytes(Bytes),
}

impl RequestBody {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            RequestBody::Empty => true,
            RequestBody::Text(text) => text.is_empty(),
            RequestBody::Bytes(bytes) => bytes.is_empty(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RequestBody::Empty => &[],
            RequestBody::Text(text) => text.as_bytes(),
            RequestBody::Bytes(bytes) => bytes.as_ref(),
        }
    }

    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        match self {
            RequestBody::Empty => Bytes::new(),
            RequestBody::Text(text) => Bytes::from(text),
            RequestBody::Bytes(bytes) => bytes,
        }
    }

    /// The body as text, if it was built from text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestBody::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        RequestBody::Bytes(bytes)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Bytes(Bytes::from(bytes))
    }
}

/// Transport-level knobs handed to the transport with a server request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub credentials: Option<Credentials>,
    pub method: Option<String>,
    pub headers: Option<HeaderOptions>,
    pub body: Option<RequestBody>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            credentials: Some(Credentials::Include),
            method: None,
            headers: None,
            body: None,
        }
    }
}

impl RequestOptions {
    /// True when credential-bearing headers may be sent
    #[must_use]
    pub fn sends_credentials(&self) -> bool {
        matches!(
            self.credentials,
            Some(Credentials::Include | Credentials::SameOrigin)
        )
    }
}

/// Everything a builder has accumulated for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfiguration {
    pub domain: Option<String>,
    pub path: Option<String>,
    pub file: Option<String>,
    /// Raw login mode code; registry membership is checked by validation only
    pub login_mode: Option<i64>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub options: RequestOptions,
}

impl RequestConfiguration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The method string, if one was set
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.options.method.as_deref()
    }

    /// True if the caller supplied a body directly
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.options.body.is_some()
    }
}
