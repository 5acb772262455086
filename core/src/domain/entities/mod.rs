//! Domain entities returned by the verification endpoint.

pub mod domain_verification;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use domain_verification::DomainVerificationResult;
