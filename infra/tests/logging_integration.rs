//! Global subscriber installation. Kept in its own test binary because the
//! subscriber can only be installed once per process.

use mv_infra::logging::init_logging;
use mv_infra::InfrastructureError;
use mv_shared::{Environment, LogFormat, LoggingConfig};

#[test]
fn test_init_logging_installs_once() {
    let config = LoggingConfig::for_environment(Environment::Development);
    assert!(init_logging(&config).is_ok());

    tracing::info!(event = "logging_ready", "Subscriber installed");

    let again = LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
    };
    match init_logging(&again) {
        Err(InfrastructureError::Logging(message)) => assert!(!message.is_empty()),
        other => panic!("Expected Logging error, got {:?}", other),
    }
}
