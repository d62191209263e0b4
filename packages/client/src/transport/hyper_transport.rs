//! HTTP/1 transport on hyper's pooled legacy client
//!
//! Absolute `http(s)` URLs go over the network; anything else requested
//! without options is read from the local filesystem. TLS is not wired in,
//! so `https` targets fail at connect time.

use std::time::Duration;

use bytes::Bytes;
use futures::FutureExt;
use http::header::{AUTHORIZATION, COOKIE, HeaderName, HeaderValue, USER_AGENT};
use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use super::{HttpResponse, PendingResponse, Transport};
use crate::config::{ConfigResult, RequestOptions, TransportConfig};
use crate::error::{self, Result};

/// Transport backed by `hyper_util::client::legacy::Client`
#[derive(Clone, Debug)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    config: TransportConfig,
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::from_valid_config(TransportConfig::default())
    }
}

impl HyperTransport {
    /// Create a transport with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if the configured
    /// timeout is out of range.
    pub fn with_config(config: TransportConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TransportConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn is_network_url(url: &str) -> bool {
        url::Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
    }

    fn build_request(&self, url: &str, options: RequestOptions) -> Result<Request<Full<Bytes>>> {
        let method = match options.method.as_deref() {
            Some(method) => Method::from_bytes(method.as_bytes())
                .map_err(|e| error::request(e).with_url(url))?,
            None => Method::GET,
        };

        let mut builder = Request::builder().method(method).uri(url);

        if let Some(headers) = builder.headers_mut() {
            for (name, value) in options.headers.iter().flatten() {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| error::request(e).with_url(url))?;
                let value =
                    HeaderValue::from_str(value).map_err(|e| error::request(e).with_url(url))?;
                headers.insert(name, value);
            }

            if !options.sends_credentials() {
                headers.remove(COOKIE);
                headers.remove(AUTHORIZATION);
            }

            if !headers.contains_key(USER_AGENT) {
                let agent = HeaderValue::from_str(&self.config.user_agent)
                    .map_err(|e| error::request(e).with_url(url))?;
                headers.insert(USER_AGENT, agent);
            }
        }

        let body = options.body.map(|body| body.into_bytes()).unwrap_or_default();

        builder
            .body(Full::new(body))
            .map_err(|e| error::request(e).with_url(url))
    }

    async fn send(
        client: Client<HttpConnector, Full<Bytes>>,
        request: Request<Full<Bytes>>,
        url: String,
    ) -> Result<HttpResponse> {
        let response: Response<Incoming> = client
            .request(request)
            .await
            .map_err(|e| error::request(e).with_url(url.as_str()))?;

        let (parts, body) = response.into_parts();
        let bytes = body
            .collect()
            .await
            .map_err(|e| error::body(e).with_url(url.as_str()))?
            .to_bytes();

        tracing::debug!(url = %url, status = %parts.status, bytes = bytes.len(), "response received");
        Ok(Response::from_parts(parts, bytes))
    }

    async fn read_file(path: String) -> Result<HttpResponse> {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| error::file(e, &path))?;

        tracing::debug!(path = %path, bytes = bytes.len(), "local file read");
        Response::builder()
            .status(StatusCode::OK)
            .body(Bytes::from(bytes))
            .map_err(|e| error::file(e, &path))
    }

    async fn with_deadline<F>(timeout: Duration, url: String, fut: F) -> Result<HttpResponse>
    where
        F: Future<Output = Result<HttpResponse>>,
    {
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(url = %url, ?timeout, "request timed out");
                Err(error::timeout(&url))
            }
        }
    }
}

impl Transport for HyperTransport {
    fn perform(&self, url: &str, options: Option<RequestOptions>) -> PendingResponse {
        let timeout = self.config.timeout;
        let url_owned = url.to_string();

        match options {
            None if !Self::is_network_url(url) => {
                tracing::debug!(path = %url, "fetching local file");
                Self::with_deadline(timeout, url_owned.clone(), Self::read_file(url_owned)).boxed()
            }
            options => {
                let request = match self.build_request(url, options.unwrap_or_default()) {
                    Ok(request) => request,
                    Err(e) => {
                        tracing::warn!(url = %url, error = %e, "could not assemble request");
                        return futures::future::ready(Err(e)).boxed();
                    }
                };

                tracing::debug!(method = %request.method(), url = %url, "dispatching request");
                let client = self.client.clone();
                Self::with_deadline(
                    timeout,
                    url_owned.clone(),
                    Self::send(client, request, url_owned),
                )
                .boxed()
            }
        }
    }
}
