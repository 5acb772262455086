//! Integration tests for domain verification over a real HTTP transport

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mockito::{Matcher, Server};
use mv_core::services::{DomainVerifier, DomainVerifierConfig};
use mv_core::VerifyError;
use mv_infra::{ReqwestTransport, StaticUserAgent};
use mv_shared::config::{TransportConfig, VerifyEndpointConfig};

const VERIFY_PATH: &str = "/api/v1/mobile_verify.json";
const USER_AGENT: &str = "androidStudent/6.14.0 (264)";
const AUTHORIZED_BODY: &str = r#"{"authorized": true, "result": 0, "client_id": "X", "api_key": "Y", "client_secret": "Z", "base_url": "https://example.com"}"#;

fn verifier_for(server: &Server) -> DomainVerifier<ReqwestTransport, StaticUserAgent> {
    let transport = ReqwestTransport::new(&TransportConfig {
        request_timeout_secs: Some(5),
        ..Default::default()
    })
    .unwrap();
    let endpoint = VerifyEndpointConfig::new(server.url());

    DomainVerifier::new(
        Arc::new(transport),
        Arc::new(StaticUserAgent::new(USER_AGENT)),
        DomainVerifierConfig::from_endpoint(&endpoint),
    )
}

#[tokio::test]
async fn test_verify_round_trip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", VERIFY_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domain".into(), "school.example.edu".into()),
            Matcher::UrlEncoded("user_agent".into(), USER_AGENT.into()),
        ]))
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(AUTHORIZED_BODY)
        .expect(1)
        .create_async()
        .await;

    let result = verifier_for(&server)
        .verify("school.example.edu", USER_AGENT)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.authorized());
    assert_eq!(result.result(), 0);
    assert_eq!(result.client_id(), "X");
    assert_eq!(result.api_key(), "Y");
    assert_eq!(result.client_secret(), "Z");
    assert_eq!(result.base_url(), "https://example.com");
}

#[tokio::test]
async fn test_domain_with_reserved_characters_is_encoded() {
    let domain = "school.example.edu/path?x=1&y=2";
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", VERIFY_PATH)
        .match_query(Matcher::UrlEncoded("domain".into(), domain.into()))
        .with_status(200)
        .with_body(AUTHORIZED_BODY)
        .expect(1)
        .create_async()
        .await;

    let result = verifier_for(&server).verify(domain, USER_AGENT).await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_non_success_status_is_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", VERIFY_PATH)
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": [{"message": "Invalid access token."}]}"#)
        .create_async()
        .await;

    let result = verifier_for(&server).verify("school.example.edu", USER_AGENT).await;

    mock.assert_async().await;
    match result {
        Err(VerifyError::HttpStatus { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid access token"));
        }
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", VERIFY_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Maintenance</body></html>")
        .create_async()
        .await;

    let result = verifier_for(&server).verify("school.example.edu", USER_AGENT).await;

    assert!(matches!(result, Err(VerifyError::Deserialize { .. })));
}

#[tokio::test]
async fn test_precondition_failure_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", VERIFY_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(AUTHORIZED_BODY)
        .expect(0)
        .create_async()
        .await;

    let verifier = verifier_for(&server);
    assert_eq!(
        verifier.verify("school.example.edu", "").await.unwrap_err(),
        VerifyError::MissingUserAgent
    );
    assert_eq!(
        verifier.verify("", USER_AGENT).await.unwrap_err(),
        VerifyError::MissingDomain
    );
    assert!(verifier.enqueue("", |_| panic!("completion must not run")).is_none());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    // Nothing listens on port 1 on the loopback interface
    let transport = ReqwestTransport::new(&TransportConfig {
        connect_timeout_secs: Some(2),
        ..Default::default()
    })
    .unwrap();
    let verifier = DomainVerifier::new(
        Arc::new(transport),
        Arc::new(StaticUserAgent::new(USER_AGENT)),
        DomainVerifierConfig::from_endpoint(&VerifyEndpointConfig::new("http://127.0.0.1:1")),
    );

    let error = verifier
        .verify("school.example.edu", USER_AGENT)
        .await
        .unwrap_err();

    assert!(matches!(error, VerifyError::Transport { .. }));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_enqueue_completes_once_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", VERIFY_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(AUTHORIZED_BODY)
        .expect(1)
        .create_async()
        .await;

    let completions = Arc::new(AtomicUsize::new(0));
    let counter = completions.clone();
    let handle = verifier_for(&server).enqueue("school.example.edu", move |outcome| {
        assert_eq!(outcome.unwrap().client_secret(), "Z");
        counter.fetch_add(1, Ordering::SeqCst);
    });

    handle.expect("request should start").await.unwrap();

    mock.assert_async().await;
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}
