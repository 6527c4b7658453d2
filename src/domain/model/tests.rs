// Unit tests for domain models

use std::time::{Duration, Instant};

use crate::domain::errors::*;
use crate::domain::model::*;

#[test]
fn test_video_ref_accepts_identifier_grammar() {
    let video_ref = VideoRef::new("dQw4w9WgXcQ").unwrap();
    assert_eq!(video_ref.as_str(), "dQw4w9WgXcQ");
    assert_eq!(format!("{}", video_ref), "dQw4w9WgXcQ");
}

#[test]
fn test_video_ref_rejects_short_or_foreign_tokens() {
    assert!(matches!(
        VideoRef::new("short"),
        Err(DomainError::InvalidVideoRef(_))
    ));
    assert!(matches!(
        VideoRef::new("has spaces in it"),
        Err(DomainError::InvalidVideoRef(_))
    ));
    assert!(VideoRef::new("").is_err());
}

#[test]
fn test_media_format_parsing() {
    assert_eq!(MediaFormat::parse("mp3").unwrap(), MediaFormat::Mp3);
    assert_eq!(MediaFormat::parse("MP4").unwrap(), MediaFormat::Mp4);
    assert!(MediaFormat::parse("webm").is_err());
}

#[test]
fn test_media_format_selects_quality_field() {
    assert_eq!(MediaFormat::Mp3.quality_field(), QualityField::Audio);
    assert_eq!(MediaFormat::Mp4.quality_field(), QualityField::Video);
}

#[test]
fn test_trim_range_validation() {
    let range = TrimRange::new(10.0, 20.0, 30.0).unwrap();
    assert_eq!(range.length(), 10.0);

    assert!(TrimRange::new(20.0, 10.0, 30.0).is_err());
    assert!(TrimRange::new(10.0, 10.0, 30.0).is_err());
    assert!(TrimRange::new(-1.0, 10.0, 30.0).is_err());
    assert!(TrimRange::new(0.0, 31.0, 30.0).is_err());
    assert!(TrimRange::new(0.0, f64::NAN, 30.0).is_err());
}

#[test]
fn test_trim_range_full() {
    let range = TrimRange::full(125.0).unwrap();
    assert_eq!(range.start_seconds, 0.0);
    assert_eq!(range.end_seconds, 125.0);
    assert!(TrimRange::full(0.0).is_err());
}

#[test]
fn test_submission_serializes_wire_names() {
    let submission = TrimSubmission::new(
        "https://youtu.be/dQw4w9WgXcQ".to_string(),
        Some(VideoRef::new("dQw4w9WgXcQ").unwrap()),
        MediaFormat::Mp3,
        "192".to_string(),
        TrimFields {
            start_time: "00:30".to_string(),
            end_time: String::new(),
        },
    )
    .unwrap();

    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "url": "https://youtu.be/dQw4w9WgXcQ",
            "format": "mp3",
            "quality": "192",
            "startTime": "00:30",
            "endTime": ""
        })
    );
    assert!(submission.is_trimmed());
}

#[test]
fn test_submission_requires_url() {
    let result = TrimSubmission::new(
        "   ".to_string(),
        None,
        MediaFormat::Mp4,
        "best".to_string(),
        TrimFields::default(),
    );
    assert!(matches!(result, Err(DomainError::BadArgs(_))));
}

#[test]
fn test_player_state_codes() {
    assert_eq!(PlayerState::from_code(1), Some(PlayerState::Playing));
    assert_eq!(PlayerState::from_code(5), Some(PlayerState::ContentCued));
    assert_eq!(PlayerState::from_code(-1), Some(PlayerState::Unstarted));
    assert_eq!(PlayerState::from_code(4), None);
}

#[test]
fn test_panel_phase_video_ref() {
    let video_ref = VideoRef::new("dQw4w9WgXcQ").unwrap();
    assert_eq!(PanelPhase::Empty.video_ref(), None);

    let phase = PanelPhase::Trimmable {
        video_ref: video_ref.clone(),
        duration: 125.0,
    };
    assert_eq!(phase.video_ref(), Some(&video_ref));
    assert!(phase.is_trimmable());
}

#[test]
fn test_status_line_expiry() {
    let now = Instant::now();
    let status = StatusLine::transient_error("boom", now, Duration::from_secs(3));
    assert!(!status.is_expired(now));
    assert!(status.is_expired(now + Duration::from_secs(3)));

    let persistent = StatusLine::persistent("Processing...");
    assert!(!persistent.is_expired(now + Duration::from_secs(3600)));
}
