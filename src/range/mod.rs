//! Trim range controller
//!
//! Wraps the dual-handle range widget: creates it sized to the video duration,
//! normalizes the handle values it reports and serializes committed ranges.

use tracing::{debug, info};

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::domain::rules::DefaultBoundRule;
use crate::ports::{RangeWidget, RangeWidgetFactory, RangeWidgetOptions};
use crate::utils::time::TimeCodec;

/// Formatted handle positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeDisplay {
    pub start: String,
    pub end: String,
}

impl RangeDisplay {
    fn of(range: &TrimRange) -> Self {
        Self {
            start: TimeCodec::format(range.start_seconds),
            end: TimeCodec::format(range.end_seconds),
        }
    }
}

/// Result of a `slide` event
#[derive(Debug, Clone, PartialEq)]
pub struct SlideUpdate {
    pub display: RangeDisplay,
    /// Position the player should preview
    pub seek_to: f64,
}

/// Result of a `change` event
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCommit {
    pub range: TrimRange,
    pub display: RangeDisplay,
    pub fields: TrimFields,
}

struct LiveRange {
    widget: Box<dyn RangeWidget>,
    token: SliderToken,
    duration: f64,
    range: TrimRange,
}

/// Owner of the single range widget instance
pub struct RangeController {
    factory: Box<dyn RangeWidgetFactory>,
    element: String,
    live: Option<LiveRange>,
    last_token: SliderToken,
}

impl RangeController {
    /// Create a controller that mounts widgets on `element`
    pub fn new(factory: Box<dyn RangeWidgetFactory>, element: impl Into<String>) -> Self {
        Self {
            factory,
            element: element.into(),
            live: None,
            last_token: SliderToken(0),
        }
    }

    /// Replace any live widget with a fresh one spanning `[0, duration]`.
    ///
    /// The previous widget is destroyed before the new one is created, and its token
    /// is retired so late events from it are dropped.
    pub fn initialize(&mut self, duration: f64) -> Result<RangeDisplay, DomainError> {
        self.destroy();

        if !duration.is_finite() || duration <= 0.0 {
            return Err(DomainError::BadArgs(format!(
                "Range duration must be positive, got {}",
                duration
            )));
        }

        let token = SliderToken(self.last_token.0 + 1);
        let options = RangeWidgetOptions {
            start: [0.0, duration],
            range: (0.0, duration),
            connect: true,
            tooltips: [TimeCodec::format, TimeCodec::format],
        };
        let widget = self.factory.create(&self.element, &options, token)?;
        self.last_token = token;

        let [start, end] = widget.get();
        let range = Self::normalize([start, end], duration).or_else(|e| {
            debug!(error = %e, "widget reported an unusable initial range; using full span");
            TrimRange::full(duration)
        })?;

        info!(duration, token = token.0, "trim range initialized");
        self.live = Some(LiveRange {
            widget,
            token,
            duration,
            range,
        });
        Ok(RangeDisplay::of(&range))
    }

    /// Widget `slide` event (continuous while dragging).
    ///
    /// Returns `Ok(None)` for events from a retired widget.
    pub fn on_slide(
        &mut self,
        token: SliderToken,
        values: [f64; 2],
    ) -> Result<Option<SlideUpdate>, DomainError> {
        let Some(live) = self.live_for(token) else {
            return Ok(None);
        };
        let range = Self::normalize(values, live.duration)?;

        Ok(Some(SlideUpdate {
            display: RangeDisplay::of(&range),
            seek_to: range.start_seconds,
        }))
    }

    /// Widget `change` event (once per drag); commits the range.
    ///
    /// Returns `Ok(None)` for events from a retired widget. A rejected range leaves the
    /// previous commit in place.
    pub fn on_change(
        &mut self,
        token: SliderToken,
        values: [f64; 2],
    ) -> Result<Option<RangeCommit>, DomainError> {
        let Some(live) = self.live_for(token) else {
            return Ok(None);
        };
        let range = Self::normalize(values, live.duration)?;
        live.range = range;

        Ok(Some(RangeCommit {
            range,
            display: RangeDisplay::of(&range),
            fields: DefaultBoundRule::fields_for(&range, live.duration),
        }))
    }

    /// Release the live widget, if any
    pub fn destroy(&mut self) {
        if let Some(live) = self.live.take() {
            live.widget.destroy();
            info!(token = live.token.0, "trim range destroyed");
        }
    }

    /// A widget instance is live
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Token of the live widget
    pub fn token(&self) -> Option<SliderToken> {
        self.live.as_ref().map(|live| live.token)
    }

    /// Last committed range
    pub fn range(&self) -> Option<TrimRange> {
        self.live.as_ref().map(|live| live.range)
    }

    /// Duration the live widget spans
    pub fn duration(&self) -> Option<f64> {
        self.live.as_ref().map(|live| live.duration)
    }

    fn live_for(&mut self, token: SliderToken) -> Option<&mut LiveRange> {
        match self.live.as_mut() {
            Some(live) if live.token == token => Some(live),
            _ => {
                debug!(token = token.0, "ignoring event from retired range widget");
                None
            }
        }
    }

    /// Clamp handle values into `[0, duration]`, round them to whole seconds and
    /// require `start < end`.
    ///
    /// An end handle at the track end stays at the exact duration so it keeps
    /// serializing as the default bound.
    fn normalize(values: [f64; 2], duration: f64) -> Result<TrimRange, DomainError> {
        let [start, end] = values;
        if start.is_nan() || end.is_nan() {
            return Err(DomainError::InvalidTimeRange(
                "Handle positions must be numbers".to_string(),
            ));
        }

        let start = start.clamp(0.0, duration).round().min(duration);
        let end = end.clamp(0.0, duration);
        let end = if end >= duration {
            duration
        } else {
            end.round().min(duration)
        };
        TrimRange::new(start, end, duration)
    }
}
