// Domain models - Core types and data structures

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Canonical video identifier extracted from a pasted URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoRef(String);

impl VideoRef {
    /// Minimum token length accepted by the fallback grammar
    pub const MIN_LEN: usize = 10;

    /// Create a video reference, validating the identifier grammar
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        if token.len() < Self::MIN_LEN {
            return Err(DomainError::InvalidVideoRef(format!(
                "'{}' is shorter than {} characters",
                token,
                Self::MIN_LEN
            )));
        }
        if !token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidVideoRef(format!(
                "'{}' contains characters outside [A-Za-z0-9_-]",
                token
            )));
        }
        Ok(Self(token))
    }

    /// Borrow the identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output format requested from the processing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    /// Audio only
    Mp3,
    /// Audio and video
    Mp4,
}

impl MediaFormat {
    /// Parse format from string (case-insensitive)
    pub fn parse(format_str: &str) -> Result<Self, DomainError> {
        match format_str.trim().to_lowercase().as_str() {
            "mp3" => Ok(MediaFormat::Mp3),
            "mp4" => Ok(MediaFormat::Mp4),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid format: {}. Valid formats: mp3, mp4",
                format_str
            ))),
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Mp4 => "mp4",
        }
    }

    /// Which quality selector applies to this format
    pub fn quality_field(&self) -> QualityField {
        match self {
            MediaFormat::Mp3 => QualityField::Audio,
            MediaFormat::Mp4 => QualityField::Video,
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality selector shown next to the format choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityField {
    Audio,
    Video,
}

/// User-selected sub-interval of the video, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimRange {
    pub start_seconds: f64,
    pub end_seconds: f64,
}

impl TrimRange {
    /// Create a range, enforcing `0 <= start < end <= duration`
    pub fn new(start_seconds: f64, end_seconds: f64, duration: f64) -> Result<Self, DomainError> {
        if !start_seconds.is_finite() || !end_seconds.is_finite() {
            return Err(DomainError::InvalidTimeRange(
                "Range bounds must be finite".to_string(),
            ));
        }
        if start_seconds < 0.0 {
            return Err(DomainError::InvalidTimeRange(format!(
                "start ({}) cannot be negative",
                start_seconds
            )));
        }
        if start_seconds >= end_seconds {
            return Err(DomainError::InvalidTimeRange(format!(
                "start ({}) must be less than end ({})",
                start_seconds, end_seconds
            )));
        }
        if end_seconds > duration {
            return Err(DomainError::InvalidTimeRange(format!(
                "end ({}) exceeds duration ({})",
                end_seconds, duration
            )));
        }
        Ok(Self {
            start_seconds,
            end_seconds,
        })
    }

    /// Range spanning the whole video
    pub fn full(duration: f64) -> Result<Self, DomainError> {
        Self::new(0.0, duration, duration)
    }

    /// Length of the selection in seconds
    pub fn length(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

/// Serialized trim bounds; an empty string means "use the natural video boundary"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimFields {
    pub start_time: String,
    pub end_time: String,
}

impl TrimFields {
    /// Both bounds at their defaults
    pub fn is_default(&self) -> bool {
        self.start_time.is_empty() && self.end_time.is_empty()
    }
}

/// Snapshot of a trim/format request at submit time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrimSubmission {
    /// URL exactly as typed by the user
    pub url: String,
    #[serde(skip)]
    pub video_ref: Option<VideoRef>,
    pub format: MediaFormat,
    pub quality: String,
    pub start_time: String,
    pub end_time: String,
}

impl TrimSubmission {
    /// Create a submission snapshot
    pub fn new(
        url: String,
        video_ref: Option<VideoRef>,
        format: MediaFormat,
        quality: String,
        fields: TrimFields,
    ) -> Result<Self, DomainError> {
        if url.trim().is_empty() {
            return Err(DomainError::BadArgs("URL is required".to_string()));
        }
        Ok(Self {
            url,
            video_ref,
            format,
            quality,
            start_time: fields.start_time,
            end_time: fields.end_time,
        })
    }

    /// Whether the request asks for a sub-range rather than the whole video
    pub fn is_trimmed(&self) -> bool {
        !self.start_time.is_empty() || !self.end_time.is_empty()
    }
}

/// Lifecycle status of the remote player session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Uninitialized,
    Loading,
    Ready,
}

/// Player states reported by the embed platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    /// New content has been loaded into the player
    ContentCued,
}

impl PlayerState {
    /// Map the platform's numeric state codes
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(PlayerState::Unstarted),
            0 => Some(PlayerState::Ended),
            1 => Some(PlayerState::Playing),
            2 => Some(PlayerState::Paused),
            3 => Some(PlayerState::Buffering),
            5 => Some(PlayerState::ContentCued),
            _ => None,
        }
    }
}

/// Outcome of duration discovery after a readiness signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Readiness {
    /// Player is ready and reports a positive duration
    Usable(f64),
    /// Player is ready but the duration is zero or unavailable
    Unusable,
}

/// Generation token identifying one remote player instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(pub u64);

/// Generation token identifying one range widget instance and its listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderToken(pub u64);

/// Coordinator state
#[derive(Debug, Clone, PartialEq)]
pub enum PanelPhase {
    /// No valid video reference in the URL input
    Empty,
    /// Video reference known, player not yet usable
    AwaitingPlayer { video_ref: VideoRef },
    /// Player usable and range controller live
    Trimmable { video_ref: VideoRef, duration: f64 },
}

impl PanelPhase {
    /// Video reference backing the current phase
    pub fn video_ref(&self) -> Option<&VideoRef> {
        match self {
            PanelPhase::Empty => None,
            PanelPhase::AwaitingPlayer { video_ref } => Some(video_ref),
            PanelPhase::Trimmable { video_ref, .. } => Some(video_ref),
        }
    }

    pub fn is_trimmable(&self) -> bool {
        matches!(self, PanelPhase::Trimmable { .. })
    }
}

/// Severity of a status-line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Text shown in the status line
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Option<Instant>,
}

impl StatusLine {
    /// Empty status line
    pub fn cleared() -> Self {
        Self {
            text: String::new(),
            kind: StatusKind::Info,
            expires_at: None,
        }
    }

    /// Message that stays until overwritten
    pub fn persistent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
            expires_at: None,
        }
    }

    /// Error message that clears itself after `ttl`
    pub fn transient_error(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
            expires_at: Some(now + ttl),
        }
    }

    /// Whether a transient message has passed its deadline
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.map_or(false, |deadline| now >= deadline)
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::cleared()
    }
}

/// File returned by a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl DownloadedFile {
    pub fn new(filename: String, bytes: Vec<u8>) -> Self {
        Self { filename, bytes }
    }

    /// Payload size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(test)]
mod tests;
