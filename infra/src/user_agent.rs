//! User agent providers
//!
//! The endpoint refuses requests without a user agent, so the host application
//! supplies one either directly or through the environment.

use std::sync::Arc;

use mv_core::services::UserAgentProvider;

/// Environment variable read by `EnvUserAgent`
pub const USER_AGENT_ENV: &str = "MOBILE_VERIFY_USER_AGENT";

/// Build a user agent in the `<app>/<version> (<build>)` form
pub fn format_user_agent(app: &str, version: &str, build: &str) -> String {
    format!("{}/{} ({})", app, version, build)
}

/// Provider returning a fixed user agent
#[derive(Debug, Clone)]
pub struct StaticUserAgent(String);

impl StaticUserAgent {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self(user_agent.into())
    }
}

impl UserAgentProvider for StaticUserAgent {
    fn user_agent(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Provider reading the user agent from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvUserAgent {
    var: String,
}

impl EnvUserAgent {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvUserAgent {
    fn default() -> Self {
        Self::new(USER_AGENT_ENV)
    }
}

impl UserAgentProvider for EnvUserAgent {
    fn user_agent(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Pick a provider: the configured value if any, otherwise the environment
pub fn create_user_agent_provider(configured: Option<&str>) -> Arc<dyn UserAgentProvider> {
    match configured {
        Some(user_agent) => Arc::new(StaticUserAgent::new(user_agent)),
        None => Arc::new(EnvUserAgent::default()),
    }
}
