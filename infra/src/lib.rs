//! # Infrastructure Layer
//!
//! Concrete implementations behind the core verification service:
//!
//! - **Transport**: reqwest-backed HTTPS transport and a static canned-response transport
//! - **User agent**: fixed and environment-backed user agent providers
//! - **Settings**: layered configuration loading (defaults, TOML file, environment)
//! - **Logging**: `tracing-subscriber` initialisation
//! - **CLI**: argument parsing for the `mobile-verify` binary

use mv_core::services::{DomainVerifier, DomainVerifierConfig, HttpTransport, UserAgentProvider};
use mv_core::VerifyError;
use mv_shared::AppConfig;

pub mod cli;
pub mod logging;
pub mod settings;
pub mod transport;
pub mod user_agent;

pub use settings::{load_config, load_config_from, ConfigSources};
pub use transport::{create_transport, ReqwestTransport, StaticResponseTransport};
pub use user_agent::{create_user_agent_provider, format_user_agent, EnvUserAgent, StaticUserAgent};

/// Verifier wired with trait-object collaborators chosen at runtime
pub type SharedDomainVerifier = DomainVerifier<dyn HttpTransport, dyn UserAgentProvider>;

/// Wired-up services ready for use
#[derive(Clone)]
pub struct MobileVerifyServices {
    /// Configuration the services were built from
    pub config: AppConfig,
    /// Domain verifier
    pub verifier: SharedDomainVerifier,
}

/// Build the verifier and its collaborators from a loaded configuration
pub fn build_services(config: AppConfig) -> Result<MobileVerifyServices, InfrastructureError> {
    let transport = create_transport(&config.transport)?;
    let user_agent = create_user_agent_provider(config.user_agent.as_deref());
    let verifier_config = DomainVerifierConfig::from_endpoint(&config.endpoint);

    tracing::info!(
        endpoint = %verifier_config.endpoint_url,
        transport = transport.name(),
        environment = %config.environment,
        "Mobile verify services initialized"
    );

    let verifier = DomainVerifier::new(transport, user_agent, verifier_config);
    Ok(MobileVerifyServices { config, verifier })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration source could not be read or merged
    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    /// Fixture or file access error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),

    /// Verification call failed
    #[error(transparent)]
    Verify(#[from] VerifyError),
}
