//! Shared utilities and common types for the mobile-verify workspace
//!
//! This crate provides functionality used by both the core and infrastructure crates:
//! - Configuration types
//! - Validation helpers
//! - Domain normalization and secret masking for logs

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig,
    TransportConfig, VerifyEndpointConfig,
};
pub use utils::{domain, mask, validation};
