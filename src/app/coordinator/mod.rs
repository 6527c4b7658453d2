// Trim coordinator - Panel state machine tying URL input, player session and range widget

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::app::submit_interactor::{SubmitInteractor, SubmitReport};
use crate::config::PanelConfig;
use crate::domain::model::*;
use crate::domain::rules::{QualitySelector, SubmissionRules, VideoRefParser};
use crate::error::{PanelError, PanelResult};
use crate::player::PlayerSession;
use crate::ports::{PlayerService, RangeWidgetFactory};
use crate::range::{RangeController, RangeDisplay};
use crate::utils::time::TimeCodec;

/// Status text while a submission is in flight
pub const PROCESSING_MESSAGE: &str = "Processing...";

/// Status text after a successful submission
pub const READY_MESSAGE: &str = "Download ready!";

/// Values the user has entered
#[derive(Debug, Clone, PartialEq)]
pub struct PanelForm {
    pub url: String,
    pub format: MediaFormat,
    pub audio_quality: String,
    pub video_quality: String,
    pub agreed: bool,
}

/// Everything the panel renders
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub preview_visible: bool,
    pub trim_enabled: bool,
    pub start_display: String,
    pub end_display: String,
    /// Trim fields sent with the next submission
    pub fields: TrimFields,
    pub confirmation_open: bool,
    pub status: StatusLine,
}

impl PanelView {
    fn reset_range(&mut self) {
        let zero = TimeCodec::format(0.0);
        self.start_display = zero.clone();
        self.end_display = zero;
        self.fields = TrimFields::default();
    }

    fn show_range(&mut self, display: RangeDisplay) {
        self.start_display = display.start;
        self.end_display = display.end;
    }
}

impl Default for PanelView {
    fn default() -> Self {
        let mut view = Self {
            preview_visible: false,
            trim_enabled: false,
            start_display: String::new(),
            end_display: String::new(),
            fields: TrimFields::default(),
            confirmation_open: false,
            status: StatusLine::cleared(),
        };
        view.reset_range();
        view
    }
}

/// Owner of the panel state and its two collaborators
pub struct TrimCoordinator {
    session: PlayerSession,
    range: RangeController,
    phase: PanelPhase,
    platform_ready: bool,
    submission_pending: bool,
    form: PanelForm,
    view: PanelView,
    message_ttl: Duration,
}

impl TrimCoordinator {
    /// Create an empty panel. Nothing is bound until a URL arrives and the platform is ready.
    pub fn new(
        player_service: Box<dyn PlayerService>,
        widget_factory: Box<dyn RangeWidgetFactory>,
        config: &PanelConfig,
    ) -> Self {
        Self {
            session: PlayerSession::new(
                player_service,
                config.player_container.clone(),
                config.player_options(),
            ),
            range: RangeController::new(widget_factory, config.slider_element.clone()),
            phase: PanelPhase::Empty,
            platform_ready: false,
            submission_pending: false,
            form: PanelForm {
                url: String::new(),
                format: config.default_format,
                audio_quality: config.default_audio_quality.clone(),
                video_quality: config.default_video_quality.clone(),
                agreed: false,
            },
            view: PanelView::default(),
            message_ttl: config.message_ttl(),
        }
    }

    pub fn phase(&self) -> &PanelPhase {
        &self.phase
    }

    pub fn form(&self) -> &PanelForm {
        &self.form
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    pub fn range(&self) -> &RangeController {
        &self.range
    }

    pub fn is_platform_ready(&self) -> bool {
        self.platform_ready
    }

    pub fn is_submission_pending(&self) -> bool {
        self.submission_pending
    }

    /// URL input changed
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.form.url = url.into();
        self.apply_url();
    }

    /// The embed platform finished loading; binds whatever the URL input holds now
    pub fn on_platform_ready(&mut self) {
        if self.platform_ready {
            debug!("duplicate platform ready signal");
            return;
        }
        self.platform_ready = true;
        info!("player platform ready");
        self.apply_url();
    }

    /// Player `onReady` event
    pub fn on_player_ready(&mut self, token: SessionToken) {
        if let Some(readiness) = self.session.on_ready(token) {
            self.apply_readiness(readiness);
        }
    }

    /// Player `onStateChange` event
    pub fn on_player_state_changed(&mut self, token: SessionToken, state: PlayerState) {
        if let Some(readiness) = self.session.on_state_changed(token, state) {
            self.apply_readiness(readiness);
        }
    }

    /// Range widget `slide` event: update the labels and preview the start position
    pub fn on_range_slide(&mut self, token: SliderToken, values: [f64; 2]) {
        match self.range.on_slide(token, values) {
            Ok(Some(update)) => {
                self.view.show_range(update.display);
                self.session.seek_to(update.seek_to);
            }
            Ok(None) => {}
            Err(e) => debug!(error = %e, ?values, "slide rejected"),
        }
    }

    /// Range widget `change` event: commit the trim fields
    pub fn on_range_change(&mut self, token: SliderToken, values: [f64; 2]) {
        match self.range.on_change(token, values) {
            Ok(Some(commit)) => {
                debug!(
                    start = commit.range.start_seconds,
                    end = commit.range.end_seconds,
                    "trim range committed"
                );
                self.view.show_range(commit.display);
                self.view.fields = commit.fields;
            }
            Ok(None) => {}
            Err(e) => debug!(error = %e, ?values, "range change rejected; keeping previous range"),
        }
    }

    pub fn set_format(&mut self, format: MediaFormat) {
        self.form.format = format;
    }

    /// Quality selector shown for the current format
    pub fn visible_quality(&self) -> QualityField {
        self.form.format.quality_field()
    }

    pub fn set_audio_quality(&mut self, quality: impl Into<String>) {
        self.form.audio_quality = quality.into();
    }

    pub fn set_video_quality(&mut self, quality: impl Into<String>) {
        self.form.video_quality = quality.into();
    }

    /// Show the download confirmation; requires a URL
    pub fn open_confirmation(&mut self) -> PanelResult<()> {
        if self.form.url.trim().is_empty() {
            return Err(self.reject(PanelError::InvalidUrl {
                url: self.form.url.clone(),
            }));
        }
        self.view.confirmation_open = true;
        Ok(())
    }

    /// Hide the confirmation and clear the agreement
    pub fn close_confirmation(&mut self) {
        self.view.confirmation_open = false;
        self.form.agreed = false;
    }

    pub fn set_agreement(&mut self, agreed: bool) {
        self.form.agreed = agreed;
    }

    /// Validate the form and snapshot it for sending.
    ///
    /// On success the panel shows "Processing..." and stays pending until
    /// [`finish_submission`](Self::finish_submission).
    pub fn begin_submission(&mut self) -> PanelResult<TrimSubmission> {
        if self.submission_pending {
            debug!("submission rejected; one is already in flight");
            return Err(PanelError::SubmissionInFlight);
        }
        if self.form.url.trim().is_empty() {
            return Err(self.reject(PanelError::InvalidUrl {
                url: self.form.url.clone(),
            }));
        }
        if !self.form.agreed {
            return Err(self.reject(PanelError::UserAgreementMissing));
        }

        self.view.confirmation_open = false;

        let quality = QualitySelector::select(
            self.form.format,
            &self.form.audio_quality,
            &self.form.video_quality,
        )
        .to_string();
        let submission = TrimSubmission::new(
            self.form.url.clone(),
            self.phase.video_ref().cloned(),
            self.form.format,
            quality,
            self.view.fields.clone(),
        )
        .and_then(|submission| SubmissionRules::validate(&submission).map(|()| submission));

        let submission = match submission {
            Ok(submission) => submission,
            Err(e) => return Err(self.reject(e.into())),
        };

        self.submission_pending = true;
        self.view.status = StatusLine::persistent(PROCESSING_MESSAGE);
        info!(
            format = %submission.format,
            quality = %submission.quality,
            trimmed = submission.is_trimmed(),
            "submission started"
        );
        Ok(submission)
    }

    /// Record the outcome of the submission started by [`begin_submission`](Self::begin_submission)
    pub fn finish_submission<T>(&mut self, outcome: &PanelResult<T>) {
        self.submission_pending = false;
        match outcome {
            Ok(_) => {
                info!("submission finished");
                self.view.status = StatusLine::persistent(READY_MESSAGE);
            }
            Err(e) => {
                warn!(error = %e, "submission failed");
                self.show_error(e);
            }
        }
    }

    /// Run a full submission through `interactor`
    pub async fn submit(&mut self, interactor: &SubmitInteractor) -> PanelResult<SubmitReport> {
        let submission = self.begin_submission()?;
        let outcome = interactor.execute(&submission).await;
        self.finish_submission(&outcome);
        outcome
    }

    /// Clear a transient status message whose deadline has passed. Returns whether it cleared.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        if self.view.status.is_expired(now) {
            self.view.status = StatusLine::cleared();
            return true;
        }
        false
    }

    fn apply_url(&mut self) {
        match VideoRefParser::extract(&self.form.url) {
            Some(video_ref) => self.enter_awaiting(video_ref),
            None => self.enter_empty(),
        }
    }

    fn enter_empty(&mut self) {
        if !matches!(self.phase, PanelPhase::Empty) {
            info!("URL cleared; tearing down player and trim range");
        }
        self.session.destroy();
        self.range.destroy();
        self.view.reset_range();
        self.view.trim_enabled = false;
        self.view.preview_visible = false;
        self.phase = PanelPhase::Empty;
    }

    fn enter_awaiting(&mut self, video_ref: VideoRef) {
        let unchanged = self.phase.video_ref() == Some(&video_ref)
            && (self.session.is_bound_to(&video_ref) || !self.platform_ready);
        if unchanged {
            debug!(video_ref = %video_ref, "URL changed without changing the video");
            return;
        }

        info!(video_ref = %video_ref, "video reference detected");
        self.disable_trim();
        self.view.preview_visible = true;
        self.phase = PanelPhase::AwaitingPlayer {
            video_ref: video_ref.clone(),
        };

        if !self.platform_ready {
            debug!(video_ref = %video_ref, "platform not ready; deferring player bind");
            return;
        }
        if let Err(e) = self.session.bind(video_ref) {
            warn!(error = %e, "failed to bind player");
        }
    }

    fn apply_readiness(&mut self, readiness: Readiness) {
        let Some(video_ref) = self.phase.video_ref().cloned() else {
            debug!(?readiness, "readiness without a video reference");
            return;
        };
        if !self.session.is_bound_to(&video_ref) {
            debug!(video_ref = %video_ref, ?readiness, "readiness from a player not showing this video");
            return;
        }

        match readiness {
            Readiness::Usable(duration) => match self.range.initialize(duration) {
                Ok(display) => {
                    info!(video_ref = %video_ref, duration, "panel trimmable");
                    self.view.fields = TrimFields::default();
                    self.view.show_range(display);
                    self.view.trim_enabled = true;
                    self.phase = PanelPhase::Trimmable {
                        video_ref,
                        duration,
                    };
                }
                Err(e) => {
                    warn!(error = %e, "failed to create trim range");
                    self.disable_trim();
                    self.phase = PanelPhase::AwaitingPlayer { video_ref };
                }
            },
            Readiness::Unusable => {
                debug!(video_ref = %video_ref, "player ready without a duration");
                self.disable_trim();
                self.phase = PanelPhase::AwaitingPlayer { video_ref };
            }
        }
    }

    fn disable_trim(&mut self) {
        self.range.destroy();
        self.view.reset_range();
        self.view.trim_enabled = false;
    }

    /// Show `error` as a transient status and hand it back
    fn reject(&mut self, error: PanelError) -> PanelError {
        warn!(error = %error, "request rejected");
        self.show_error(&error);
        error
    }

    fn show_error(&mut self, error: &PanelError) {
        self.view.status =
            StatusLine::transient_error(error.status_message(), Instant::now(), self.message_ttl);
    }
}
