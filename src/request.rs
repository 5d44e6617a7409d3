use crate::fetch::FetchError;
use crate::transport::{RequestInit, Transport};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Sent verbatim as the `authorization` header
    pub token: Option<String>,
    pub body: Option<Value>,
    /// Applied last, overriding computed headers
    pub headers: HeaderMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonResponse {
    pub ok: bool,
    pub json: Value,
}

/// Sends a JSON request to `endpoint` and decodes the JSON reply.
///
/// Non-2xx statuses are reported through `ok`, never as errors. Fails only
/// when the transport fails or the reply is not valid JSON.
pub async fn request<T>(
    transport: &T,
    endpoint: &str,
    method: Method,
    options: RequestOptions,
) -> Result<JsonResponse, FetchError>
where
    T: Transport + ?Sized,
{
    let init = build_init(method, options)?;

    debug!("{} {}", init.method, endpoint);
    let response = transport.send(endpoint, &init).await?;
    let json = response.json()?;

    Ok(JsonResponse {
        ok: response.ok(),
        json,
    })
}

fn build_init(method: Method, options: RequestOptions) -> Result<RequestInit, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = options.token.as_deref().filter(|t| !t.is_empty()) {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(token).map_err(invalid_token)?,
        );
    }

    for (name, value) in options.headers.iter() {
        headers.insert(name.clone(), value.clone());
    }

    let body = match options.body {
        None | Some(Value::Null) => None,
        Some(body) => Some(serde_json::to_string(&body)?),
    };

    Ok(RequestInit {
        method,
        headers,
        body,
    })
}

fn invalid_token(err: InvalidHeaderValue) -> FetchError {
    FetchError::InvalidHeader(err.to_string())
}
