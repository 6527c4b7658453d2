// Domain rules - URL recognition and trim serialization policies

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::utils::time::TimeCodec;

/// Host/path shapes that carry a video identifier, followed by the identifier itself.
///
/// The strict 11-character form is tried first; the 10+ fallback only wins when the
/// strict form cannot match at that position.
const VIDEO_REF_PATTERN: &str = r"(?i)(?:youtube\.com/(?:.*[?&]v=|v/|embed/|live/|shorts/)|youtu\.be/|youtube-nocookie\.com/embed/)([a-z0-9_-]{11}|[a-z0-9_-]{10,})";

static VIDEO_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VIDEO_REF_PATTERN).expect("valid regex"));

/// Extracts canonical video references from pasted URLs
pub struct VideoRefParser;

impl VideoRefParser {
    /// Extract the video reference from a URL, or `None` when no known shape matches
    pub fn extract(url: &str) -> Option<VideoRef> {
        let captures = VIDEO_REF_RE.captures(url.trim())?;
        let token = captures.get(1)?.as_str();
        VideoRef::new(token).ok()
    }
}

/// Serialization of trim bounds for the processing endpoint
pub struct DefaultBoundRule;

impl DefaultBoundRule {
    /// Empty when the start sits on the natural beginning of the video
    pub fn start_field(start_seconds: f64) -> String {
        if start_seconds > 0.0 {
            TimeCodec::format(start_seconds)
        } else {
            String::new()
        }
    }

    /// Empty when the end sits on the natural end of the video
    pub fn end_field(end_seconds: f64, duration: f64) -> String {
        if end_seconds < duration {
            TimeCodec::format(end_seconds)
        } else {
            String::new()
        }
    }

    /// Both fields for a committed range
    pub fn fields_for(range: &TrimRange, duration: f64) -> TrimFields {
        TrimFields {
            start_time: Self::start_field(range.start_seconds),
            end_time: Self::end_field(range.end_seconds, duration),
        }
    }
}

/// Picks the quality value that accompanies a format
pub struct QualitySelector;

impl QualitySelector {
    /// Audio quality for mp3, video quality for mp4
    pub fn select<'a>(format: MediaFormat, audio_quality: &'a str, video_quality: &'a str) -> &'a str {
        match format.quality_field() {
            QualityField::Audio => audio_quality,
            QualityField::Video => video_quality,
        }
    }
}

/// Validation applied to a submission before it leaves the panel
pub struct SubmissionRules;

impl SubmissionRules {
    /// Check non-empty trim fields against the endpoint's acceptance grammar
    /// and require `start < end` when both are explicit.
    pub fn validate(submission: &TrimSubmission) -> Result<(), DomainError> {
        for (name, value) in [
            ("start", &submission.start_time),
            ("end", &submission.end_time),
        ] {
            if !value.is_empty() && !TimeCodec::is_well_formed(value) {
                return Err(DomainError::InvalidFormat(format!(
                    "{} time '{}' is not MM:SS or H:MM:SS",
                    name, value
                )));
            }
        }

        if !submission.start_time.is_empty() && !submission.end_time.is_empty() {
            let start = TimeCodec::parse(&submission.start_time)?;
            let end = TimeCodec::parse(&submission.end_time)?;
            if start >= end {
                return Err(DomainError::InvalidTimeRange(format!(
                    "start ({}) must be before end ({})",
                    submission.start_time, submission.end_time
                )));
            }
        }

        Ok(())
    }
}
