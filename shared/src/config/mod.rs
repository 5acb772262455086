//! Configuration module
//!
//! - `endpoint` - Location of the mobile verify endpoint
//! - `environment` - Environment detection and logging configuration
//! - `transport` - HTTP transport selection and timeouts

pub mod endpoint;
pub mod environment;
pub mod transport;

use serde::{Deserialize, Serialize};

use crate::utils::validation::{validators, Validate, ValidationErrors};

pub use endpoint::VerifyEndpointConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use transport::{TransportConfig, PROVIDER_HTTP, PROVIDER_STATIC};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Verification endpoint location
    pub endpoint: VerifyEndpointConfig,

    /// Transport configuration
    pub transport: TransportConfig,

    /// User agent sent to the endpoint, if configured
    pub user_agent: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            endpoint: VerifyEndpointConfig::default(),
            transport: TransportConfig::default(),
            user_agent: None,
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create the default configuration for a given environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.endpoint.base_url) {
            errors.add_error("endpoint.base_url", "Base URL must not be empty", "required");
        } else if !validators::is_valid_url(&self.endpoint.base_url) {
            errors.add_error(
                "endpoint.base_url",
                "Base URL must start with http:// or https://",
                "invalid_scheme",
            );
        }

        if !validators::not_empty(&self.endpoint.path) {
            errors.add_error("endpoint.path", "Endpoint path must not be empty", "required");
        }

        if self.transport.provider == PROVIDER_STATIC && self.transport.static_response_path.is_none() {
            errors.add_error(
                "transport.static_response_path",
                "Static transport requires a response fixture path",
                "required",
            );
        }

        if let Some(ua) = &self.user_agent {
            if !validators::is_present(Some(ua)) {
                errors.add_error("user_agent", "User agent must not be empty when set", "empty");
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}
