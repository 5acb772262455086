//! Traits for transport and user-agent integration

use async_trait::async_trait;

use super::types::{TransportRequest, TransportResponse};

/// Trait for the HTTP layer the verifier sends requests through
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors. `Err` is reserved
    /// for failures where no response was received.
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, String>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Source of the user agent string the endpoint requires
pub trait UserAgentProvider: Send + Sync {
    /// Current user agent, or `None` when the host has not set one
    fn user_agent(&self) -> Option<String>;
}
