// Signguard
// Main entry point for the signguard binary

use clap::{CommandFactory, Parser};
use sdk::errors::ErrorHint;
use signguard_engine::cli::Cli;
use signguard_engine::directory::ImageDirectoryClient;
use signguard_engine::remediation::Remediator;
use signguard_engine::telemetry::init_telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Missing credentials print usage and exit cleanly
    let Some(config) = cli.directory_config() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    init_telemetry();

    let version = env!("CARGO_PKG_VERSION");
    let commit = env!("GIT_COMMIT_HASH");
    let timestamp = env!("BUILD_TIMESTAMP");

    tracing::info!("Signguard v{} ({} - {})", version, commit, timestamp);

    let client = ImageDirectoryClient::new(config)?;
    let remediator = Remediator::new(Arc::new(client));

    if let Err(err) = remediator.run().await {
        tracing::error!(
            error = %err,
            hint = err.user_hint(),
            remediation_attempted = err.remediation_attempted(),
            "Remediation run failed"
        );
        return Err(err.into());
    }

    Ok(())
}
