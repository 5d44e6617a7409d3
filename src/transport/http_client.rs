use super::{HttpResponse, RequestInit, Transport, TransportError};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Failures to reach the server or to read its reply all look alike to
/// callers: they carry the retryable network failure message.
fn map_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
        debug!("Network failure: {}", err);
        TransportError::network_failure()
    } else {
        TransportError::new(err.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, init: &RequestInit) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(init.method.clone(), url)
            .headers(init.headers.clone());

        if let Some(body) = &init.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_error)?;

        debug!("{} {} -> {}", init.method, url, status);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_network_failure() {
        let transport = ReqwestTransport::new();
        let err = transport
            .send("http://127.0.0.1:1/", &RequestInit::default())
            .await
            .unwrap_err();
        assert!(err.is_network_failure());
    }

    #[tokio::test]
    async fn test_invalid_url_is_not_network_failure() {
        let transport = ReqwestTransport::new();
        let err = transport
            .send("not a url", &RequestInit::default())
            .await
            .unwrap_err();
        assert!(!err.is_network_failure());
    }
}
