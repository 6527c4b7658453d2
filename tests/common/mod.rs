//! Fake ports shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;

use async_trait::async_trait;

use trimx_panel::domain::model::DownloadedFile;
use trimx_panel::ports::{
    DownloadSink, PlayerHandle, PlayerOptions, PlayerService, RangeWidget, RangeWidgetFactory,
    RangeWidgetOptions, SubmissionPort,
};
use trimx_panel::*;

pub type Shared<T> = Rc<RefCell<T>>;

/// Everything the fake player platform was asked to do
#[derive(Default)]
pub struct PlayerLog {
    pub created: Vec<(String, VideoRef, SessionToken)>,
    pub origin: Option<String>,
    pub loaded: Vec<VideoRef>,
    pub seeks: Vec<(f64, bool)>,
    pub destroyed: usize,
    /// Duration reported by every live handle
    pub duration: f64,
    pub fail_create: bool,
    pub fail_load: bool,
}

pub struct FakePlayerService {
    log: Shared<PlayerLog>,
}

impl PlayerService for FakePlayerService {
    fn create(
        &mut self,
        container: &str,
        video_ref: &VideoRef,
        options: &PlayerOptions,
        token: SessionToken,
    ) -> Result<Box<dyn PlayerHandle>, DomainError> {
        let mut log = self.log.borrow_mut();
        if log.fail_create {
            return Err(DomainError::PlayerFail("embed script missing".to_string()));
        }
        log.created
            .push((container.to_string(), video_ref.clone(), token));
        log.origin = options.origin.clone();
        Ok(Box::new(FakePlayerHandle {
            log: Rc::clone(&self.log),
        }))
    }
}

struct FakePlayerHandle {
    log: Shared<PlayerLog>,
}

impl PlayerHandle for FakePlayerHandle {
    fn load_content(&mut self, video_ref: &VideoRef) -> Result<(), DomainError> {
        let mut log = self.log.borrow_mut();
        if log.fail_load {
            return Err(DomainError::PlayerFail("content unavailable".to_string()));
        }
        log.loaded.push(video_ref.clone());
        Ok(())
    }

    fn duration(&self) -> f64 {
        self.log.borrow().duration
    }

    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) -> Result<(), DomainError> {
        self.log.borrow_mut().seeks.push((seconds, allow_seek_ahead));
        Ok(())
    }

    fn destroy(self: Box<Self>) {
        self.log.borrow_mut().destroyed += 1;
    }
}

/// Everything the fake range widget library was asked to do
#[derive(Default)]
pub struct WidgetLog {
    pub created: Vec<(String, RangeWidgetOptions, SliderToken)>,
    pub destroyed: Vec<SliderToken>,
    pub fail_create: bool,
}

pub struct FakeWidgetFactory {
    log: Shared<WidgetLog>,
}

impl RangeWidgetFactory for FakeWidgetFactory {
    fn create(
        &mut self,
        element: &str,
        options: &RangeWidgetOptions,
        token: SliderToken,
    ) -> Result<Box<dyn RangeWidget>, DomainError> {
        let mut log = self.log.borrow_mut();
        if log.fail_create {
            return Err(DomainError::WidgetFail("slider library missing".to_string()));
        }
        log.created.push((element.to_string(), *options, token));
        Ok(Box::new(FakeRangeWidget {
            values: options.start,
            token,
            log: Rc::clone(&self.log),
        }))
    }
}

struct FakeRangeWidget {
    values: [f64; 2],
    token: SliderToken,
    log: Shared<WidgetLog>,
}

impl RangeWidget for FakeRangeWidget {
    fn get(&self) -> [f64; 2] {
        self.values
    }

    fn destroy(self: Box<Self>) {
        self.log.borrow_mut().destroyed.push(self.token);
    }
}

/// Coordinator wired to fakes, with handles on the fake logs
pub struct Harness {
    pub coordinator: TrimCoordinator,
    pub player: Shared<PlayerLog>,
    pub widgets: Shared<WidgetLog>,
}

pub fn harness() -> Harness {
    harness_with(&PanelConfig::default())
}

pub fn harness_with(config: &PanelConfig) -> Harness {
    let player = Shared::default();
    let widgets = Shared::default();
    let coordinator = TrimCoordinator::new(
        Box::new(FakePlayerService {
            log: Rc::clone(&player),
        }),
        Box::new(FakeWidgetFactory {
            log: Rc::clone(&widgets),
        }),
        config,
    );
    Harness {
        coordinator,
        player,
        widgets,
    }
}

impl Harness {
    pub fn session_token(&self) -> SessionToken {
        self.coordinator.session().token()
    }

    pub fn slider_token(&self) -> SliderToken {
        self.coordinator.range().token().expect("live range widget")
    }

    /// Paste `url`, make sure the platform is loaded and report `duration` as ready
    pub fn make_trimmable(&mut self, url: &str, duration: f64) {
        self.player.borrow_mut().duration = duration;
        self.coordinator.set_url(url);
        if !self.coordinator.is_platform_ready() {
            self.coordinator.on_platform_ready();
        }
        let token = self.session_token();
        self.coordinator.on_player_ready(token);
    }
}

pub const URL_A: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
pub const URL_B: &str = "https://youtu.be/9bZkp7q19f0";

pub fn video_ref(token: &str) -> VideoRef {
    VideoRef::new(token).expect("valid video ref")
}

/// Scripted response of the fake submission endpoint
#[derive(Clone)]
pub enum FakeOutcome {
    File(DownloadedFile),
    Rejected(String),
    Unreachable,
}

pub struct FakeSubmission {
    pub outcome: FakeOutcome,
    pub requests: Mutex<Vec<TrimSubmission>>,
}

impl FakeSubmission {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SubmissionPort for FakeSubmission {
    async fn submit(&self, submission: &TrimSubmission) -> PanelResult<DownloadedFile> {
        self.requests.lock().unwrap().push(submission.clone());
        match &self.outcome {
            FakeOutcome::File(file) => Ok(file.clone()),
            FakeOutcome::Rejected(message) => Err(PanelError::SubmissionFailed {
                message: message.clone(),
            }),
            FakeOutcome::Unreachable => Err(PanelError::Network {
                message: "connection refused".to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct MemorySink {
    pub saved: Mutex<Vec<DownloadedFile>>,
}

#[async_trait]
impl DownloadSink for MemorySink {
    async fn save(&self, file: &DownloadedFile) -> Result<PathBuf, DomainError> {
        self.saved.lock().unwrap().push(file.clone());
        Ok(PathBuf::from("downloads").join(&file.filename))
    }
}
