//! Transport configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Real HTTPS transport
pub const PROVIDER_HTTP: &str = "http";

/// Canned-response transport for offline debugging
pub const PROVIDER_STATIC: &str = "static";

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    /// Transport provider ("http", "static")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Whole-request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds; unset means no timeout
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,

    /// JSON body served by the static provider
    #[serde(default)]
    pub static_response_path: Option<PathBuf>,

    /// HTTP status served by the static provider
    #[serde(default = "default_static_status")]
    pub static_status: u16,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
            static_response_path: None,
            static_status: default_static_status(),
        }
    }
}

impl TransportConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

fn default_provider() -> String {
    PROVIDER_HTTP.to_string()
}

fn default_static_status() -> u16 {
    200
}
