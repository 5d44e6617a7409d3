use crate::transport::{HttpResponse, RequestInit, Transport, TransportError};
use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send + 'a>>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The server answered 500; the reason is its `error` field or raw body
    #[error("{}", .reason.as_deref().unwrap_or("Internal server error"))]
    Server { reason: Option<String> },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl FetchError {
    pub fn reason(&self) -> Option<&str> {
        match self {
            FetchError::Server { reason } => reason.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOptions {
    /// Extra attempts allowed after a network failure
    pub retries: u32,
    /// Sent to the transport as is
    pub init: RequestInit,
    /// Options of the attempt that failed, set on retries only
    pub options: Option<Box<FetchOptions>>,
}

impl FetchOptions {
    pub fn new(init: RequestInit) -> Self {
        Self {
            init,
            ..Default::default()
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Options for the next attempt after `self` failed.
    ///
    /// The failed options are nested under `options` instead of being
    /// carried over, so the retried request is sent with a default init
    /// (plain GET, no headers, no body).
    fn retry(self) -> Self {
        Self {
            retries: self.retries.saturating_sub(1),
            init: RequestInit::default(),
            options: Some(Box::new(self)),
        }
    }
}

/// Fetches `url`, turning a 500 into [`FetchError::Server`] and retrying
/// network failures while `options.retries` allows it.
///
/// Every other status, 404 included, resolves with the response.
pub fn playground_fetch<'a, T>(
    transport: &'a T,
    url: &'a str,
    options: FetchOptions,
) -> FetchFuture<'a, HttpResponse>
where
    T: Transport + ?Sized,
{
    Box::pin(async move {
        match transport.send(url, &options.init).await {
            Ok(response) if response.status == StatusCode::INTERNAL_SERVER_ERROR => {
                let reason = server_error_reason(response.text());
                warn!("Server error from {}: {:?}", url, reason);
                Err(FetchError::Server { reason })
            }
            Ok(response) => Ok(response),
            Err(err) if err.is_network_failure() && options.retries > 0 => {
                warn!(
                    "{} for {}, retrying ({} left)",
                    err,
                    url,
                    options.retries - 1
                );
                playground_fetch(transport, url, options.retry()).await
            }
            Err(err) => {
                debug!("Fetch of {} failed: {}", url, err);
                Err(err.into())
            }
        }
    })
}

fn server_error_reason(text: String) -> Option<String> {
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => match json.get("error") {
            Some(Value::String(reason)) => Some(reason.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        },
        Err(_) => Some(text),
    }
}
