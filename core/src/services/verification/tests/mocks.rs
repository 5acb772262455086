//! Mock implementations for testing the domain verifier

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::services::verification::traits::{HttpTransport, UserAgentProvider};
use crate::services::verification::types::{TransportRequest, TransportResponse};

pub const AUTHORIZED_BODY: &str = r#"{
    "authorized": true,
    "result": 0,
    "client_id": "X",
    "api_key": "Y",
    "client_secret": "Z",
    "base_url": "https://example.com"
}"#;

// Mock transport that records every request and replays a fixed outcome
pub struct RecordingTransport {
    pub requests: Arc<Mutex<Vec<TransportRequest>>>,
    pub outcome: Result<TransportResponse, String>,
    pub delay: Option<Duration>,
}

impl RecordingTransport {
    pub fn responding(response: TransportResponse) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(response),
            delay: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            outcome: Err(message.to_string()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, String> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "recording"
    }
}

// Mock user agent provider with a fixed answer
pub struct FixedUserAgent(pub Option<String>);

impl FixedUserAgent {
    pub fn set(user_agent: &str) -> Self {
        Self(Some(user_agent.to_string()))
    }

    pub fn unset() -> Self {
        Self(None)
    }
}

impl UserAgentProvider for FixedUserAgent {
    fn user_agent(&self) -> Option<String> {
        self.0.clone()
    }
}
