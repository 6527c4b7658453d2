//! Panel configuration
//!
//! Every key has a default so a partial `[panel]` table, or no file at all, is valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::errors::DomainError;
use crate::domain::model::MediaFormat;
use crate::ports::PlayerOptions;
use crate::utils::logging::{LogLevel, LoggingConfig};

/// Runtime configuration for the panel and its adapters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Base URL of the processing service; `/download` is appended
    pub endpoint: String,
    /// Lifetime of transient status messages
    pub message_ttl_ms: u64,
    /// Directory downloaded files are written to
    pub download_dir: PathBuf,
    /// Element id the player is mounted in
    pub player_container: String,
    /// Element id the range widget is mounted on
    pub slider_element: String,
    /// Page origin passed to the embed player
    pub origin: Option<String>,
    pub default_format: MediaFormat,
    pub default_audio_quality: String,
    pub default_video_quality: String,
    pub log_level: LogLevel,
    pub json_logs: bool,
    /// Upper bound for one submission round trip
    pub request_timeout_secs: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            message_ttl_ms: 3000,
            download_dir: PathBuf::from("downloads"),
            player_container: "player".to_string(),
            slider_element: "trim-slider".to_string(),
            origin: None,
            default_format: MediaFormat::Mp4,
            default_audio_quality: "192".to_string(),
            default_video_quality: "best".to_string(),
            log_level: LogLevel::Info,
            json_logs: false,
            request_timeout_secs: 300,
        }
    }
}

impl PanelConfig {
    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), DomainError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(DomainError::BadArgs("endpoint cannot be empty".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(DomainError::BadArgs(format!(
                "endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }
        if self.message_ttl_ms == 0 {
            return Err(DomainError::BadArgs(
                "message_ttl_ms must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(DomainError::BadArgs(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.player_container.trim().is_empty() || self.slider_element.trim().is_empty() {
            return Err(DomainError::BadArgs(
                "player_container and slider_element cannot be empty".to_string(),
            ));
        }
        if self.default_audio_quality.trim().is_empty()
            || self.default_video_quality.trim().is_empty()
        {
            return Err(DomainError::BadArgs(
                "default qualities cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.message_ttl_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Embed options for the remote player
    pub fn player_options(&self) -> PlayerOptions {
        PlayerOptions {
            origin: self.origin.clone(),
            ..PlayerOptions::default()
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            json: self.json_logs,
            ..LoggingConfig::default()
        }
    }

    /// Default quality for a format
    pub fn default_quality(&self, format: MediaFormat) -> &str {
        match format {
            MediaFormat::Mp3 => &self.default_audio_quality,
            MediaFormat::Mp4 => &self.default_video_quality,
        }
    }
}
