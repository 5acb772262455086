//! Common utility functions

pub mod domain;
pub mod mask;
pub mod validation;

// Re-export commonly used utilities
pub use domain::normalize_domain;
pub use mask::{mask_secret, redact};
pub use validation::*;
