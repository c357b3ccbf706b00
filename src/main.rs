// src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use synergy_check::repodata::RepodataClient;
use synergy_check::{report_overlaps, CheckConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "synergy-check")]
#[command(author, version, about = "Check for packages published in both EPEL and Synergy", long_about = None)]
struct Cli {
    /// Path to a TOML file overriding the built-in repository tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Restrict the check to specific release versions (may be repeated)
    #[arg(long = "release-version", value_name = "VERSION")]
    release_versions: Vec<String>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CheckConfig::load(path)?,
        None => CheckConfig::default(),
    };
    if !cli.release_versions.is_empty() {
        config.retain_versions(&cli.release_versions)?;
    }

    let client = RepodataClient::new(Duration::from_secs(cli.timeout_secs))?;

    let stdout = io::stdout();
    let found = report_overlaps(&client, &config, &mut stdout.lock())?;
    if found {
        info!("Overlapping packages were found");
    }

    // A found overlap is a report, not a failure; always exit normally
    Ok(())
}
