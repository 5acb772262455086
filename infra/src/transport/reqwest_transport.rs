//! Reqwest HTTP Transport
//!
//! Sends verification requests over HTTPS using a pooled `reqwest::Client`.
//! The client is stateless apart from its connection pool, so one instance
//! is shared by every call.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use mv_core::services::{HttpTransport, TransportRequest, TransportResponse};
use mv_shared::config::TransportConfig;

use crate::InfrastructureError;

/// HTTPS transport backed by reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the timeouts from configuration
    pub fn new(config: &TransportConfig) -> Result<Self, InfrastructureError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder.build()?;

        debug!(
            request_timeout_secs = ?config.request_timeout_secs,
            connect_timeout_secs = ?config.connect_timeout_secs,
            "Reqwest transport initialized"
        );

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, String> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Request to {} failed: {}", request.url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?;

        debug!(
            status = status,
            content_type = ?content_type,
            body_len = body.len(),
            "Received mobile verify response"
        );

        Ok(TransportResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}
