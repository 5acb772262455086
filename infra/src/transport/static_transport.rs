//! Static Response Transport
//!
//! Answers every request with the same status and body without touching the
//! network. The body is supplied by the caller or read from a fixture file,
//! so no credentials are compiled into the binary.

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

use mv_core::services::{HttpTransport, TransportRequest, TransportResponse};

use crate::InfrastructureError;

/// Canned-response transport for development and testing
///
/// This implementation:
/// - Returns a fixed status and body
/// - Counts requests
/// - Remembers the last request for inspection
#[derive(Clone)]
pub struct StaticResponseTransport {
    /// Status returned for every request
    status: u16,
    /// Body returned for every request
    body: Arc<Vec<u8>>,
    /// Counter for tracking number of requests served
    request_count: Arc<AtomicU64>,
    /// Most recent request
    last_request: Arc<Mutex<Option<TransportRequest>>>,
}

impl StaticResponseTransport {
    /// Create a transport serving `body` with `status`
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Arc::new(body.into()),
            request_count: Arc::new(AtomicU64::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a transport serving `body` with status 200
    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    /// Create a transport serving the contents of a fixture file
    pub fn from_file(path: impl AsRef<Path>, status: u16) -> Result<Self, InfrastructureError> {
        let body = std::fs::read(path.as_ref())?;
        Ok(Self::new(status, body))
    }

    /// Get the total number of requests served
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Reset the request counter
    pub fn reset_counter(&self) {
        self.request_count.store(0, Ordering::SeqCst);
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl HttpTransport for StaticResponseTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, String> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(request.clone());

        info!(
            target: "mobile_verify_transport",
            provider = "static",
            url = %request.url,
            status = self.status,
            request_number = count,
            "Serving canned mobile verify response"
        );

        Ok(TransportResponse::new(self.status, self.body.as_slice()).with_content_type("application/json"))
    }

    fn name(&self) -> &str {
        "static"
    }
}
