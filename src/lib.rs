//! TrimX Panel Library
//!
//! Coordinates an embedded video player with a dual-handle trim range and submits
//! trim/format requests to the TrimX processing service.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod player;
pub mod ports;
pub mod range;
pub mod utils;

// Re-export commonly used types
pub use app::{PanelForm, PanelView, SubmitInteractor, SubmitReport, TrimCoordinator};
pub use config::PanelConfig;
pub use domain::errors::DomainError;
pub use domain::model::{
    MediaFormat, PanelPhase, PlayerState, Readiness, SessionToken, SliderToken, StatusLine,
    TrimFields, TrimRange, TrimSubmission, VideoRef,
};
pub use domain::rules::VideoRefParser;
pub use error::{PanelError, PanelResult};
pub use utils::time::TimeCodec;
