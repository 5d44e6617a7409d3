mod http_client;
#[cfg(test)]
pub(crate) mod mock;

pub use http_client::ReqwestTransport;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Message carried by transport failures that are worth retrying.
pub const NETWORK_REQUEST_FAILED: &str = "Network request failed";

/// Sends HTTP requests on behalf of the fetch helpers.
///
/// Connection handling, TLS and timeouts are entirely up to the
/// implementation; the helpers only see a buffered [`HttpResponse`] or a
/// [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, init: &RequestInit) -> Result<HttpResponse, TransportError>;
}

/// Method, headers and body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestInit {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn network_failure() -> Self {
        Self::new(NETWORK_REQUEST_FAILED)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Only an exact message match counts, anything else is final.
    pub fn is_network_failure(&self) -> bool {
        self.message == NETWORK_REQUEST_FAILED
    }
}
