//! TrimX Panel CLI
//!
//! Command-line front end for the TrimX panel: video reference extraction, time
//! conversion and trim submission.
//!
//! # Usage
//!
//! ```bash
//! trimx-panel extract "https://youtu.be/dQw4w9WgXcQ"
//! trimx-panel time format 100
//! trimx-panel submit --url "https://youtu.be/dQw4w9WgXcQ" --format mp3 --start 0:30 --end 1:40 --agree
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use trimx_panel::cli::{commands, Cli, Commands};
use trimx_panel::config_initialization::initialize_configuration;
use trimx_panel::utils::logging::init_logging;

/// Main entry point for the TrimX panel CLI
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = initialize_configuration(&cli.overrides(), |key| std::env::var(key).ok())?;
    init_logging(&loaded.config.logging_config());

    info!("Starting TrimX panel");
    loaded.log_summary();
    let config = loaded.config;

    match cli.command {
        Commands::Extract(args) => {
            info!("Executing extract command");
            commands::extract(args)?;
        }
        Commands::Time(command) => {
            info!("Executing time command");
            commands::time(command)?;
        }
        Commands::Submit(args) => {
            info!("Executing submit command");
            commands::submit(args, config).await?;
        }
    }

    Ok(())
}
