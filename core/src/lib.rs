//! # Mobile Verify Core
//!
//! Domain layer for mobile login domain verification. This crate contains the
//! verification result record, the error taxonomy, the collaborator traits the
//! service depends on, and the `DomainVerifier` service itself.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
