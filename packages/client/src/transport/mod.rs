//! Transport collaborator
//!
//! The only I/O boundary. A transport performs exactly one request per call
//! and hands back a pending response; it never retries.

pub mod hyper_transport;

use bytes::Bytes;
use futures::future::BoxFuture;

use crate::config::RequestOptions;
use crate::error::Result;

pub use hyper_transport::HyperTransport;

/// A fully received response
pub type HttpResponse = http::Response<Bytes>;

/// The pending result of one transport call
pub type PendingResponse = BoxFuture<'static, Result<HttpResponse>>;

/// Performs an HTTP request (or local resource fetch)
///
/// `options` is `None` for file fetches and fully populated for server
/// requests.
pub trait Transport: Send + Sync {
    fn perform(&self, url: &str, options: Option<RequestOptions>) -> PendingResponse;
}

impl<F> Transport for F
where
    F: Fn(&str, Option<RequestOptions>) -> PendingResponse + Send + Sync,
{
    fn perform(&self, url: &str, options: Option<RequestOptions>) -> PendingResponse {
        self(url, options)
    }
}
