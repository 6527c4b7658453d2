// TOML config adapter - Panel configuration stored in a `[panel]` table

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::PanelConfig;
use crate::domain::errors::*;

/// File names probed when no explicit config path is given
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["trimx_panel.toml", "config/trimx_panel.toml"];

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    panel: PanelConfig,
}

/// TOML configuration adapter
#[derive(Debug, Clone)]
pub struct TomlConfigAdapter {
    config_file_path: PathBuf,
}

impl TomlConfigAdapter {
    /// Create an adapter bound to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file_path: path.into(),
        }
    }

    /// First existing file among [`DEFAULT_CONFIG_PATHS`]
    pub fn locate() -> Option<Self> {
        DEFAULT_CONFIG_PATHS
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| {
                debug!(path = %path.display(), "found configuration file");
                Self::new(path)
            })
    }

    /// Path this adapter reads
    pub fn path(&self) -> &Path {
        &self.config_file_path
    }

    /// Read and parse the file
    pub fn load(&self) -> Result<PanelConfig, DomainError> {
        let content = std::fs::read_to_string(&self.config_file_path).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to read config file {}: {}",
                self.config_file_path.display(),
                e
            ))
        })?;

        let config = Self::deserialize_config(&content)?;
        info!(path = %self.config_file_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse a `[panel]` document
    pub fn deserialize_config(toml_content: &str) -> Result<PanelConfig, DomainError> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| DomainError::BadArgs(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.panel)
    }
}
