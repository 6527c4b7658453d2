//! CLI module for the TrimX panel
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config_initialization::ConfigOverrides;

pub mod args;
pub mod commands;

/// TrimX Panel
///
/// Extract video references, convert trim times and submit trim requests to the
/// TrimX processing service.
#[derive(Parser, Debug)]
#[command(name = "trimx-panel")]
#[command(about = "TrimX Panel - Trim and download online videos")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (default: trimx_panel.toml when present)
    #[arg(long, env = "TRIMX_PANEL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the processing service
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Directory downloads are saved to
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration values given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            endpoint: self.endpoint.clone(),
            download_dir: self.out.clone(),
            log_level: self.log_level.clone(),
            json_logs: self.json_logs,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the video reference found in a URL
    Extract(args::ExtractArgs),
    /// Convert between seconds and time strings
    #[command(subcommand)]
    Time(args::TimeCommand),
    /// Send a trim request and save the result
    Submit(args::SubmitArgs),
}
