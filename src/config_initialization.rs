//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::toml_config::TomlConfigAdapter;
use crate::config::PanelConfig;
use crate::utils::logging::LogLevel;

pub const ENV_ENDPOINT: &str = "TRIMX_PANEL_ENDPOINT";
pub const ENV_DOWNLOAD_DIR: &str = "TRIMX_PANEL_DOWNLOAD_DIR";
pub const ENV_MESSAGE_TTL_MS: &str = "TRIMX_PANEL_MESSAGE_TTL_MS";
pub const ENV_LOG_LEVEL: &str = "TRIMX_PANEL_LOG_LEVEL";

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub download_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

/// Resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: PanelConfig,
    /// File the base values were read from, if any
    pub source: Option<PathBuf>,
    /// Number of environment variables applied
    pub env_overrides: usize,
}

impl LoadedConfig {
    /// Report the resolved configuration; call once the subscriber is installed
    pub fn log_summary(&self) {
        info!(
            config_file = ?self.source,
            env_overrides = self.env_overrides,
            endpoint = %self.config.endpoint,
            download_dir = %self.config.download_dir.display(),
            log_level = self.config.log_level.as_directive(),
            "configuration ready"
        );
    }
}

/// Build the configuration following precedence: CLI > Env > File > Defaults
///
/// `env` looks up environment variables; the binary passes `std::env::var`.
/// Nothing is logged here since the subscriber depends on the result; use
/// [`LoadedConfig::log_summary`] afterwards.
pub fn initialize_configuration<F>(overrides: &ConfigOverrides, env: F) -> Result<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut config, source) = load_config_file(overrides)?;
    let env_overrides = apply_environment(&mut config, &env)?;
    apply_cli_overrides(&mut config, overrides)?;

    config.validate().context("Invalid configuration")?;
    Ok(LoadedConfig {
        config,
        source,
        env_overrides,
    })
}

/// Explicit `--config` must exist; otherwise the default locations are optional
fn load_config_file(overrides: &ConfigOverrides) -> Result<(PanelConfig, Option<PathBuf>)> {
    let adapter = match &overrides.config_path {
        Some(path) => TomlConfigAdapter::new(path),
        None => match TomlConfigAdapter::locate() {
            Some(adapter) => adapter,
            None => return Ok((PanelConfig::default(), None)),
        },
    };

    let config = adapter
        .load()
        .with_context(|| format!("Failed to load {}", adapter.path().display()))?;
    Ok((config, Some(adapter.path().to_path_buf())))
}

fn apply_environment<F>(config: &mut PanelConfig, env: &F) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());
    let mut applied = 0;

    if let Some(endpoint) = lookup(ENV_ENDPOINT) {
        config.endpoint = endpoint;
        applied += 1;
    }
    if let Some(dir) = lookup(ENV_DOWNLOAD_DIR) {
        config.download_dir = PathBuf::from(dir);
        applied += 1;
    }
    if let Some(ttl) = lookup(ENV_MESSAGE_TTL_MS) {
        config.message_ttl_ms = ttl
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number of milliseconds, got '{}'", ENV_MESSAGE_TTL_MS, ttl))?;
        applied += 1;
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.log_level = LogLevel::parse(&level).with_context(|| format!("Invalid {}", ENV_LOG_LEVEL))?;
        applied += 1;
    }

    Ok(applied)
}

fn apply_cli_overrides(config: &mut PanelConfig, overrides: &ConfigOverrides) -> Result<()> {
    if let Some(endpoint) = &overrides.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(dir) = &overrides.download_dir {
        config.download_dir = dir.clone();
    }
    if let Some(level) = &overrides.log_level {
        config.log_level = LogLevel::parse(level).context("Invalid --log-level")?;
    }
    if overrides.json_logs {
        config.json_logs = true;
    }
    Ok(())
}
