//! Layered configuration loading
//!
//! Sources are merged in order, later ones winning:
//! 1. Built-in defaults for the detected environment
//! 2. Optional `config.<environment>.toml` in the configuration directory
//! 3. Environment variables with the `MOBILE_VERIFY__` prefix,
//!    e.g. `MOBILE_VERIFY__ENDPOINT__BASE_URL`

use std::path::PathBuf;

use mv_shared::validation::Validate;
use mv_shared::{AppConfig, Environment};

use crate::InfrastructureError;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "MOBILE_VERIFY";

/// Separator between prefix and nested keys
pub const ENV_SEPARATOR: &str = "__";

/// Where configuration is read from
#[derive(Debug, Clone)]
pub struct ConfigSources {
    /// Environment whose defaults and file are used
    pub environment: Environment,
    /// Directory searched for `config.<environment>.toml`
    pub config_dir: PathBuf,
    /// Prefix for environment variable overrides
    pub env_prefix: String,
}

impl ConfigSources {
    /// Sources for the environment detected from `ENVIRONMENT`/`ENV`/`RUST_ENV`
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            config_dir: std::env::var("MOBILE_VERIFY_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Path of the environment-specific configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(self.environment.config_file())
    }
}

/// Load configuration for the current process
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    load_config_from(&ConfigSources::from_env())
}

/// Load and validate configuration from explicit sources
pub fn load_config_from(sources: &ConfigSources) -> Result<AppConfig, InfrastructureError> {
    let defaults = AppConfig::for_environment(sources.environment);
    let file = sources.config_file();

    tracing::debug!(
        environment = %sources.environment,
        file = %file.display(),
        "Loading mobile verify configuration"
    );

    let mut config: AppConfig = ::config::Config::builder()
        .add_source(::config::Config::try_from(&defaults)?)
        .add_source(::config::File::from(file).required(false))
        .add_source(
            ::config::Environment::with_prefix(&sources.env_prefix)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    // The environment that selected the file wins over anything a source says
    config.environment = sources.environment;

    config
        .validate()
        .map_err(|errors| InfrastructureError::Config(errors.to_string()))?;

    Ok(config)
}
