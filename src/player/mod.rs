//! Player session management
//!
//! Owns the single remote player instance, binds it to a [`VideoRef`] and turns
//! the platform's readiness and state-change callbacks into [`Readiness`] results.

use tracing::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::ports::{PlayerHandle, PlayerOptions, PlayerService};

/// Live binding between a video reference and the remote player
pub struct PlayerSession {
    service: Box<dyn PlayerService>,
    container: String,
    options: PlayerOptions,
    handle: Option<Box<dyn PlayerHandle>>,
    video_ref: Option<VideoRef>,
    status: SessionStatus,
    duration: Option<f64>,
    token: SessionToken,
}

impl PlayerSession {
    /// Create an unbound session that will create players in `container`
    pub fn new(
        service: Box<dyn PlayerService>,
        container: impl Into<String>,
        options: PlayerOptions,
    ) -> Self {
        Self {
            service,
            container: container.into(),
            options,
            handle: None,
            video_ref: None,
            status: SessionStatus::Uninitialized,
            duration: None,
            token: SessionToken(0),
        }
    }

    /// Point the session at `video_ref`.
    ///
    /// Creates the remote player on first use; afterwards the existing instance switches
    /// content in place. Binding the reference already loaded does nothing. A failed
    /// switch tears the player down so the next bind creates a fresh one.
    pub fn bind(&mut self, video_ref: VideoRef) -> Result<(), DomainError> {
        if let Some(handle) = self.handle.as_mut() {
            if self.video_ref.as_ref() == Some(&video_ref) {
                debug!(video_ref = %video_ref, "player already bound to this video");
                return Ok(());
            }

            if let Err(e) = handle.load_content(&video_ref) {
                warn!(video_ref = %video_ref, error = %e, "content switch failed; dropping player");
                self.destroy();
                return Err(e);
            }
            info!(video_ref = %video_ref, token = self.token.0, "player switched content");
        } else {
            let token = SessionToken(self.token.0 + 1);
            let handle = self
                .service
                .create(&self.container, &video_ref, &self.options, token)?;
            self.handle = Some(handle);
            self.token = token;
            info!(video_ref = %video_ref, token = token.0, "player created");
        }

        self.video_ref = Some(video_ref);
        self.status = SessionStatus::Loading;
        self.duration = None;
        Ok(())
    }

    /// Platform `onReady` callback
    pub fn on_ready(&mut self, token: SessionToken) -> Option<Readiness> {
        if !self.accepts(token) {
            debug!(token = token.0, current = self.token.0, "ignoring stale ready event");
            return None;
        }
        Some(self.discover_duration())
    }

    /// Platform `onStateChange` callback.
    ///
    /// Duration discovery re-runs when new content was cued, or when playback starts while
    /// the duration is still unknown. Every other transition is ignored.
    pub fn on_state_changed(&mut self, token: SessionToken, state: PlayerState) -> Option<Readiness> {
        if !self.accepts(token) {
            debug!(token = token.0, ?state, "ignoring stale state change");
            return None;
        }

        match state {
            PlayerState::ContentCued => Some(self.discover_duration()),
            PlayerState::Playing if self.duration.is_none() => Some(self.discover_duration()),
            PlayerState::Playing
            | PlayerState::Unstarted
            | PlayerState::Ended
            | PlayerState::Paused
            | PlayerState::Buffering => None,
        }
    }

    /// Seek to `seconds` for live preview. Failures are logged and dropped.
    pub fn seek_to(&mut self, seconds: f64) {
        let Some(handle) = self.handle.as_mut() else {
            debug!(seconds, "seek requested without a live player");
            return;
        };
        if let Err(e) = handle.seek_to(seconds, true) {
            warn!(seconds, error = %e, "preview seek failed");
        }
    }

    /// Tear down the remote player. Safe to call with no live player.
    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
            info!(token = self.token.0, "player destroyed");
        }
        self.video_ref = None;
        self.status = SessionStatus::Uninitialized;
        self.duration = None;
    }

    /// Current lifecycle status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Known positive duration, if any
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Reference currently loaded in the player
    pub fn video_ref(&self) -> Option<&VideoRef> {
        self.video_ref.as_ref()
    }

    /// Token of the live instance
    pub fn token(&self) -> SessionToken {
        self.token
    }

    /// A remote player instance exists
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether the live instance is showing `video_ref`
    pub fn is_bound_to(&self, video_ref: &VideoRef) -> bool {
        self.is_live() && self.video_ref.as_ref() == Some(video_ref)
    }

    fn accepts(&self, token: SessionToken) -> bool {
        self.handle.is_some() && token == self.token
    }

    fn discover_duration(&mut self) -> Readiness {
        self.status = SessionStatus::Ready;
        let reported = self.handle.as_ref().map_or(0.0, |handle| handle.duration());

        if reported.is_finite() && reported > 0.0 {
            self.duration = Some(reported);
            debug!(duration = reported, "player duration discovered");
            Readiness::Usable(reported)
        } else {
            self.duration = None;
            debug!(reported, "player ready without a usable duration");
            Readiness::Unusable
        }
    }
}
