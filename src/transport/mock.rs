use super::{HttpResponse, RequestInit, Transport, TransportError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued outcomes in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<(String, RequestInit)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.push(Ok(HttpResponse::new(status, body.to_string())))
    }

    pub fn fail(self, message: &str) -> Self {
        self.push(Err(TransportError::new(message)))
    }

    fn push(self, outcome: Result<HttpResponse, TransportError>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<(String, RequestInit)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, url: &str, init: &RequestInit) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), init.clone()));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no response queued for {}", url))
    }
}
