//! Unit tests for verification error types

use crate::errors::VerifyError;

#[test]
fn test_precondition_errors() {
    assert!(VerifyError::MissingDomain.is_precondition());
    assert!(VerifyError::MissingUserAgent.is_precondition());
    assert!(!VerifyError::Transport { message: "reset".to_string() }.is_precondition());
}

#[test]
fn test_retryable_errors() {
    let transport = VerifyError::Transport { message: "connection refused".to_string() };
    assert!(transport.is_retryable());

    let unavailable = VerifyError::HttpStatus { status: 503, body: String::new() };
    assert!(unavailable.is_retryable());

    let throttled = VerifyError::HttpStatus { status: 429, body: String::new() };
    assert!(throttled.is_retryable());

    let not_found = VerifyError::HttpStatus { status: 404, body: String::new() };
    assert!(!not_found.is_retryable());

    let malformed = VerifyError::Deserialize { message: "expected value".to_string() };
    assert!(!malformed.is_retryable());
    assert!(!VerifyError::MissingUserAgent.is_retryable());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        VerifyError::MissingUserAgent.to_string(),
        "User agent must be set for this API to work correctly"
    );

    let error = VerifyError::HttpStatus { status: 401, body: "{}".to_string() };
    assert_eq!(error.to_string(), "Unexpected HTTP status 401");
}
