//! Domain verifier implementation

use std::sync::Arc;

use mv_shared::mask::mask_secret;
use mv_shared::validation::validators;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::entities::DomainVerificationResult;
use crate::errors::{VerifyError, VerifyResult};

use super::config::DomainVerifierConfig;
use super::traits::{HttpTransport, UserAgentProvider};
use super::types::{TransportRequest, TransportResponse};

/// Query parameter carrying the domain being verified
pub const DOMAIN_PARAM: &str = "domain";

/// Query parameter carrying the caller's user agent
pub const USER_AGENT_PARAM: &str = "user_agent";

/// Asks the mobile verify endpoint whether a domain may be used for mobile login
pub struct DomainVerifier<T, U>
where
    T: HttpTransport + ?Sized,
    U: UserAgentProvider + ?Sized,
{
    /// Transport used to reach the endpoint
    transport: Arc<T>,
    /// Source of the user agent for `verify_current` and `enqueue`
    user_agent: Arc<U>,
    /// Service configuration
    config: DomainVerifierConfig,
}

impl<T, U> Clone for DomainVerifier<T, U>
where
    T: HttpTransport + ?Sized,
    U: UserAgentProvider + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            user_agent: Arc::clone(&self.user_agent),
            config: self.config.clone(),
        }
    }
}

impl<T, U> DomainVerifier<T, U>
where
    T: HttpTransport + ?Sized,
    U: UserAgentProvider + ?Sized,
{
    /// Create a new domain verifier
    ///
    /// # Arguments
    ///
    /// * `transport` - HTTP transport implementation
    /// * `user_agent` - User agent provider
    /// * `config` - Service configuration
    pub fn new(transport: Arc<T>, user_agent: Arc<U>, config: DomainVerifierConfig) -> Self {
        Self {
            transport,
            user_agent,
            config,
        }
    }

    pub fn config(&self) -> &DomainVerifierConfig {
        &self.config
    }

    /// Build the GET request for a domain without sending it
    pub fn build_request(&self, domain: &str, user_agent: &str) -> TransportRequest {
        TransportRequest::get(self.config.endpoint_url.clone())
            .with_query(DOMAIN_PARAM, domain)
            .with_query(USER_AGENT_PARAM, user_agent)
            .with_header("User-Agent", user_agent)
            .with_header("Accept", "application/json")
    }

    /// Verify a domain using an explicit user agent
    ///
    /// This method:
    /// 1. Rejects an empty domain or user agent without touching the network
    /// 2. Sends a GET to `mobile_verify.json` with `domain` and `user_agent`
    /// 3. Requires a 2xx status
    /// 4. Decodes the JSON body into a `DomainVerificationResult`
    ///
    /// # Returns
    ///
    /// * `Ok(DomainVerificationResult)` - The decoded record
    /// * `Err(VerifyError)` - Precondition, transport, status or decode failure
    pub async fn verify(&self, domain: &str, user_agent: &str) -> VerifyResult<DomainVerificationResult> {
        let domain = Self::guard(domain, Some(user_agent))?;
        self.dispatch(&domain, user_agent).await
    }

    /// Verify a domain using the user agent from the configured provider
    pub async fn verify_current(&self, domain: &str) -> VerifyResult<DomainVerificationResult> {
        let user_agent = self.user_agent.user_agent();
        let domain = Self::guard(domain, user_agent.as_deref())?;
        // guard only passes with a present user agent
        let user_agent = user_agent.unwrap_or_default();
        self.dispatch(&domain, &user_agent).await
    }

    /// Start a verification in the background and report through a callback.
    ///
    /// The guard runs before anything is spawned. If it rejects the inputs the
    /// failure is logged, `completion` is never called and `None` is returned.
    /// Otherwise the request runs on a Tokio task and `completion` is called
    /// exactly once with the outcome.
    ///
    /// Outside a Tokio runtime nothing can be spawned: `completion` is called
    /// immediately with a transport error and `None` is returned.
    pub fn enqueue<F>(&self, domain: impl Into<String>, completion: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(VerifyResult<DomainVerificationResult>) + Send + 'static,
        T: 'static,
        U: 'static,
    {
        let domain = domain.into();
        let user_agent = self.user_agent.user_agent();
        let domain = Self::guard(&domain, user_agent.as_deref()).ok()?;
        let user_agent = user_agent.unwrap_or_default();

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                error!(domain = %domain, error = %e, "No async runtime available for mobile verify");
                completion(Err(VerifyError::Transport {
                    message: format!("No async runtime available: {}", e),
                }));
                return None;
            }
        };

        let verifier = self.clone();
        Some(handle.spawn(async move {
            let outcome = verifier.dispatch(&domain, &user_agent).await;
            completion(outcome);
        }))
    }

    /// Pre-flight check; returns the trimmed domain
    fn guard(domain: &str, user_agent: Option<&str>) -> VerifyResult<String> {
        if !validators::not_empty(domain) {
            debug!("Domain must be provided for mobile verify");
            return Err(VerifyError::MissingDomain);
        }

        if !validators::is_present(user_agent) {
            debug!("User agent must be set for this API to work correctly!");
            return Err(VerifyError::MissingUserAgent);
        }

        Ok(domain.trim().to_string())
    }

    async fn dispatch(&self, domain: &str, user_agent: &str) -> VerifyResult<DomainVerificationResult> {
        let request = self.build_request(domain, user_agent);

        debug!(
            domain = domain,
            url = %request.url,
            transport = self.transport.name(),
            "Sending mobile verify request"
        );

        let response = self.transport.send(&request).await.map_err(|message| {
            warn!(
                domain = domain,
                error = %message,
                event = "mobile_verify_transport_failed",
                "Mobile verify request failed"
            );
            VerifyError::Transport { message }
        })?;

        self.decode(domain, response)
    }

    fn decode(&self, domain: &str, response: TransportResponse) -> VerifyResult<DomainVerificationResult> {
        if !response.is_success() {
            warn!(
                domain = domain,
                status = response.status,
                event = "mobile_verify_bad_status",
                "Mobile verify endpoint returned an error status"
            );
            let body: String = response
                .body_text()
                .chars()
                .take(self.config.max_error_body_chars)
                .collect();
            return Err(VerifyError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let result = DomainVerificationResult::from_json_slice(&response.body).map_err(|e| {
            warn!(
                domain = domain,
                status = response.status,
                error = %e,
                event = "mobile_verify_decode_failed",
                "Mobile verify response could not be decoded"
            );
            VerifyError::Deserialize {
                message: e.to_string(),
            }
        })?;

        info!(
            domain = domain,
            authorized = result.authorized(),
            result = result.result(),
            client_id = %mask_secret(result.client_id()),
            base_url = result.base_url(),
            event = "mobile_verify_completed",
            "Mobile verify completed"
        );

        Ok(result)
    }
}
