use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mv_infra::cli::{render_summary, Cli};
use mv_infra::logging::init_logging;
use mv_infra::{build_services, load_config};
use mv_shared::domain::normalize_domain;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let Cli { domain, user_agent } = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    let mut config = load_config().context("Failed to load configuration")?;
    if user_agent.is_some() {
        config.user_agent = user_agent;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("warning: {}", e);
    }

    let services = build_services(config).context("Failed to initialize services")?;

    let domain = normalize_domain(&domain);
    tracing::info!(domain = %domain, "Verifying domain");

    let result = services
        .verifier
        .verify_current(&domain)
        .await
        .with_context(|| format!("Verification of '{}' failed", domain))?;

    println!("{}", render_summary(&domain, &result));

    Ok(if result.authorized() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
