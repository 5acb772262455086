//! Configuration for the domain verifier

use mv_shared::config::VerifyEndpointConfig;

/// Longest error body kept on `VerifyError::HttpStatus`
pub const DEFAULT_MAX_ERROR_BODY_CHARS: usize = 1024;

/// Configuration for the domain verifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainVerifierConfig {
    /// Absolute URL of `mobile_verify.json`
    pub endpoint_url: String,
    /// Error bodies longer than this are truncated
    pub max_error_body_chars: usize,
}

impl DomainVerifierConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            max_error_body_chars: DEFAULT_MAX_ERROR_BODY_CHARS,
        }
    }

    pub fn from_endpoint(endpoint: &VerifyEndpointConfig) -> Self {
        Self::new(endpoint.endpoint_url())
    }
}

impl Default for DomainVerifierConfig {
    fn default() -> Self {
        Self::from_endpoint(&VerifyEndpointConfig::default())
    }
}
