//! Verification endpoint configuration

use serde::{Deserialize, Serialize};

/// Default host serving the mobile verify API
pub const DEFAULT_BASE_URL: &str = "https://canvas.instructure.com";

/// Path of the mobile verify resource relative to the base URL
pub const DEFAULT_VERIFY_PATH: &str = "api/v1/mobile_verify.json";

/// Location of the mobile verify endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerifyEndpointConfig {
    /// Scheme and host, e.g. `https://canvas.instructure.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Resource path appended to the base URL
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for VerifyEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
        }
    }
}

impl VerifyEndpointConfig {
    /// Create an endpoint configuration for a base URL with the default path
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the verify resource.
    ///
    /// Joins base and path with exactly one slash regardless of how either is written.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.path.trim().trim_start_matches('/')
        )
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_path() -> String {
    DEFAULT_VERIFY_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_url() {
        let config = VerifyEndpointConfig::default();
        assert_eq!(
            config.endpoint_url(),
            "https://canvas.instructure.com/api/v1/mobile_verify.json"
        );
    }

    #[test]
    fn test_endpoint_url_slashes() {
        let config = VerifyEndpointConfig {
            base_url: "http://127.0.0.1:1234/".to_string(),
            path: "/api/v1/mobile_verify.json".to_string(),
        };
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:1234/api/v1/mobile_verify.json");
    }
}
