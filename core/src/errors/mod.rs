//! Error types for domain verification.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Failures of a verification call.
///
/// Precondition variants are raised before any request is made. The remaining
/// variants come back from the transport or from decoding the response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Domain must not be empty")]
    MissingDomain,

    #[error("User agent must be set for this API to work correctly")]
    MissingUserAgent,

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Unexpected HTTP status {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed verification response: {message}")]
    Deserialize { message: String },
}

impl VerifyError {
    /// Raised by the pre-flight guard; no request was sent
    pub fn is_precondition(&self) -> bool {
        matches!(self, VerifyError::MissingDomain | VerifyError::MissingUserAgent)
    }

    /// Whether calling `verify` again could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            VerifyError::Transport { .. } => true,
            VerifyError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

pub type VerifyResult<T> = Result<T, VerifyError>;
