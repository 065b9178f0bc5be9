use clap::Parser;
use compliance_server::{shared::LoggingUtils, AppConfig};
use std::path::PathBuf;
use tracing::{error, info};

/// Compliance server
#[derive(Debug, Parser)]
#[command(name = "compliance-server", version, about)]
struct Args {
    /// Path to the TOML config file (defaults to ./compliance.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Load configuration
    let loaded = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = LoggingUtils::initialize("info", config.json_logs()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Starting compliance server...");

    if let Err(e) = config.ensure_valid() {
        error!(rejected = e.config_error().is_some(), "{}", e);
        std::process::exit(1);
    }

    LoggingUtils::log_config_summary(&config);
}
