//! Command-line handling for the `mobile-verify` binary

use clap::Parser;
use mv_core::DomainVerificationResult;
use mv_shared::mask::{mask_secret, redact};

/// Ask the mobile verify endpoint whether a domain may be used for mobile login
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "mobile-verify",
    version,
    long_about = None,
    after_help = "Exit status: 0 authorized, 1 not authorized, 2 error"
)]
pub struct Cli {
    /// Domain to verify, e.g. school.instructure.com
    pub domain: String,

    /// User agent to send (default: configuration or MOBILE_VERIFY_USER_AGENT)
    #[arg(short, long)]
    pub user_agent: Option<String>,
}

/// Human-readable summary with credentials masked
pub fn render_summary(domain: &str, result: &DomainVerificationResult) -> String {
    format!(
        "domain:        {}\nauthorized:    {}\nresult:        {} ({})\nbase_url:      {}\nclient_id:     {}\napi_key:       {}\nclient_secret: {}",
        domain,
        result.authorized(),
        result.result(),
        result.result_code(),
        result.base_url(),
        mask_secret(result.client_id()),
        redact(result.api_key()),
        redact(result.client_secret()),
    )
}
