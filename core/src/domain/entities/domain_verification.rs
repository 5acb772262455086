//! Result of asking the endpoint whether a domain may be used for mobile login.

use mv_shared::mask::{mask_secret, redact};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::VerifyResultCode;

/// Verification record returned by `mobile_verify.json`.
///
/// Fields are read-only once decoded. `authorized` and `result` must be present
/// in the response; the credential fields read as empty strings when the
/// endpoint sends `null` or leaves them out, which it does for domains that are
/// not authorized.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainVerificationResult {
    authorized: bool,

    result: i32,

    #[serde(default, deserialize_with = "null_as_empty")]
    client_id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    api_key: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    client_secret: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    base_url: String,
}

impl DomainVerificationResult {
    pub fn new(
        authorized: bool,
        result: i32,
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            authorized,
            result,
            client_id: client_id.into(),
            api_key: api_key.into(),
            client_secret: client_secret.into(),
            base_url: base_url.into(),
        }
    }

    /// Decode a record from a raw JSON response body
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Whether the domain may be used for mobile login
    pub fn authorized(&self) -> bool {
        self.authorized
    }

    /// Raw status code as sent by the endpoint
    pub fn result(&self) -> i32 {
        self.result
    }

    pub fn result_code(&self) -> VerifyResultCode {
        VerifyResultCode::from(self.result)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when the domain is authorized and OAuth credentials came back with it
    pub fn has_credentials(&self) -> bool {
        self.authorized && !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl std::fmt::Debug for DomainVerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainVerificationResult")
            .field("authorized", &self.authorized)
            .field("result", &self.result)
            .field("client_id", &mask_secret(&self.client_id))
            .field("api_key", &redact(&self.api_key))
            .field("client_secret", &redact(&self.client_secret))
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
