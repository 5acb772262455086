//! Mobile login domain verification
//!
//! This module provides the single verification use case:
//! - Pre-flight guard on domain and user agent
//! - Request construction for `mobile_verify.json`
//! - Dispatch through an injectable HTTP transport
//! - Async and callback-style delivery of the decoded result

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::{DomainVerifierConfig, DEFAULT_MAX_ERROR_BODY_CHARS};
pub use service::{DomainVerifier, DOMAIN_PARAM, USER_AGENT_PARAM};
pub use traits::{HttpTransport, UserAgentProvider};
pub use types::{TransportRequest, TransportResponse};
