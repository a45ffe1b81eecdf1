//! Tabrepl CLI binary.

use anyhow::Result;
use tabrepl::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the tabrepl CLI.
fn main() -> Result<()> {
    // Logs go to stderr so command output on stdout stays clean.
    // Example: RUST_LOG=tabrepl=debug,tabrepl_data=debug cargo run -- run "load_file cats"
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tabrepl=warn,tabrepl_data=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting tabrepl CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Tabrepl CLI completed successfully");
    Ok(())
}
