//! Status codes carried in the `result` field of a verification response

use serde::{Deserialize, Serialize};

/// Interpretation of the integer `result` code returned by the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum VerifyResultCode {
    /// Domain verified
    Success,
    /// Endpoint reported an unspecified error
    OtherError,
    /// Domain is not registered for mobile access
    DomainNotAuthorized,
    /// The user agent was not recognised
    UnknownUserAgent,
    /// Endpoint failed for an unknown reason
    UnknownError,
    /// Any code this client does not know about
    Unrecognized(i32),
}

impl VerifyResultCode {
    pub fn code(&self) -> i32 {
        match self {
            VerifyResultCode::Success => 0,
            VerifyResultCode::OtherError => 1,
            VerifyResultCode::DomainNotAuthorized => 2,
            VerifyResultCode::UnknownUserAgent => 3,
            VerifyResultCode::UnknownError => 4,
            VerifyResultCode::Unrecognized(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, VerifyResultCode::Success)
    }
}

impl From<i32> for VerifyResultCode {
    fn from(code: i32) -> Self {
        match code {
            0 => VerifyResultCode::Success,
            1 => VerifyResultCode::OtherError,
            2 => VerifyResultCode::DomainNotAuthorized,
            3 => VerifyResultCode::UnknownUserAgent,
            4 => VerifyResultCode::UnknownError,
            other => VerifyResultCode::Unrecognized(other),
        }
    }
}

impl From<VerifyResultCode> for i32 {
    fn from(code: VerifyResultCode) -> Self {
        code.code()
    }
}

impl std::fmt::Display for VerifyResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyResultCode::Success => write!(f, "success"),
            VerifyResultCode::OtherError => write!(f, "other error"),
            VerifyResultCode::DomainNotAuthorized => write!(f, "domain not authorized"),
            VerifyResultCode::UnknownUserAgent => write!(f, "unknown user agent"),
            VerifyResultCode::UnknownError => write!(f, "unknown error"),
            VerifyResultCode::Unrecognized(code) => write!(f, "unrecognized result code {}", code),
        }
    }
}
