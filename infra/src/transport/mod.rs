//! HTTP Transport Module
//!
//! Implementations of the core `HttpTransport` trait:
//!
//! - **Reqwest**: HTTPS transport for production use
//! - **Static**: canned status and body for tests and offline debugging
//!
//! `create_transport` picks one from configuration.

use std::sync::Arc;

use mv_core::services::HttpTransport;
use mv_shared::config::{TransportConfig, PROVIDER_HTTP, PROVIDER_STATIC};

use crate::InfrastructureError;

pub mod reqwest_transport;
pub mod static_transport;

pub use reqwest_transport::ReqwestTransport;
pub use static_transport::StaticResponseTransport;

/// Create a transport based on configuration
///
/// # Arguments
///
/// * `config` - Transport configuration containing the provider name
///
/// # Returns
///
/// A shared transport implementation. Unknown providers fall back to the
/// HTTP transport; a static provider without a readable fixture is an error.
pub fn create_transport(config: &TransportConfig) -> Result<Arc<dyn HttpTransport>, InfrastructureError> {
    match config.provider.as_str() {
        PROVIDER_HTTP => Ok(Arc::new(ReqwestTransport::new(config)?)),
        PROVIDER_STATIC => {
            let path = config.static_response_path.as_ref().ok_or_else(|| {
                InfrastructureError::Config(
                    "Static transport requires transport.static_response_path".to_string(),
                )
            })?;
            let transport = StaticResponseTransport::from_file(path, config.static_status)?;
            tracing::warn!(
                fixture = %path.display(),
                status = config.static_status,
                "Using static mobile verify transport; no network requests will be made"
            );
            Ok(Arc::new(transport))
        }
        other => {
            tracing::warn!(
                "Unknown transport provider '{}', using http transport",
                other
            );
            Ok(Arc::new(ReqwestTransport::new(config)?))
        }
    }
}
