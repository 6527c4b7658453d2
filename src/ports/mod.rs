// Ports - Interface definitions (contracts)
//
// Player and range-widget ports are synchronous and single-threaded: their
// events are delivered back to `TrimCoordinator` by the host together with the
// token handed out at creation time.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::error::PanelResult;

/// Embed options passed to the remote player on creation
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    pub width: String,
    pub height: String,
    /// Play inline on mobile instead of fullscreen
    pub playsinline: bool,
    /// Show related videos at the end
    pub rel: bool,
    /// Page origin for cross-origin messaging
    pub origin: Option<String>,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            playsinline: true,
            rel: false,
            origin: None,
        }
    }
}

/// Port for the remote embed player platform
pub trait PlayerService {
    /// Create a player in `container` targeting `video_ref`.
    ///
    /// The returned instance reports `onReady` / `onStateChange` tagged with `token`.
    fn create(
        &mut self,
        container: &str,
        video_ref: &VideoRef,
        options: &PlayerOptions,
        token: SessionToken,
    ) -> Result<Box<dyn PlayerHandle>, DomainError>;
}

/// One live remote player instance
pub trait PlayerHandle {
    /// Switch content in place
    fn load_content(&mut self, video_ref: &VideoRef) -> Result<(), DomainError>;

    /// Current duration in seconds; zero while unknown
    fn duration(&self) -> f64;

    /// Seek without waiting for completion
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) -> Result<(), DomainError>;

    /// Tear down the instance and its listeners
    fn destroy(self: Box<Self>);
}

/// Tooltip renderer for one handle
pub type TooltipFormatter = fn(f64) -> String;

/// Creation options for the dual-handle range widget
#[derive(Debug, Clone, Copy)]
pub struct RangeWidgetOptions {
    /// Initial handle positions
    pub start: [f64; 2],
    /// (min, max) of the track
    pub range: (f64, f64),
    /// Fill the track between the handles
    pub connect: bool,
    pub tooltips: [TooltipFormatter; 2],
}

/// Port for the range-selection widget library
pub trait RangeWidgetFactory {
    /// Create a widget on `element`.
    ///
    /// The widget reports `slide` / `change` tagged with `token`.
    fn create(
        &mut self,
        element: &str,
        options: &RangeWidgetOptions,
        token: SliderToken,
    ) -> Result<Box<dyn RangeWidget>, DomainError>;
}

/// One live range widget
pub trait RangeWidget {
    /// Current handle positions
    fn get(&self) -> [f64; 2];

    /// Release the widget and its listeners
    fn destroy(self: Box<Self>);
}

/// Port for the trim/format processing endpoint
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Send the request and return the produced file
    async fn submit(&self, submission: &TrimSubmission) -> PanelResult<DownloadedFile>;
}

/// Port for storing downloaded files
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Store the file and return where it landed
    async fn save(&self, file: &DownloadedFile) -> Result<PathBuf, DomainError>;
}
