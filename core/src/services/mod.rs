//! Services containing the verification use case.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    DomainVerifier, DomainVerifierConfig,
    HttpTransport, UserAgentProvider,
    TransportRequest, TransportResponse,
};
