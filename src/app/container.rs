use std::sync::Arc;

use crate::adapters::{FsDownloadAdapter, HttpSubmissionAdapter};
use crate::app::{coordinator::TrimCoordinator, submit_interactor::SubmitInteractor};
use crate::config::PanelConfig;
use crate::error::PanelResult;
use crate::ports::{DownloadSink, PlayerService, RangeWidgetFactory, SubmissionPort};

pub trait AppContainer: Send + Sync {
    fn submit_interactor(&self) -> Arc<SubmitInteractor>;
}

pub struct DefaultAppContainer {
    config: PanelConfig,
    submit_interactor: Arc<SubmitInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: PanelConfig) -> PanelResult<Self> {
        let submission_port = Arc::new(HttpSubmissionAdapter::new(
            config.endpoint.clone(),
            config.request_timeout(),
        )?);
        let download_sink = Arc::new(FsDownloadAdapter::new(config.download_dir.clone()));

        Ok(Self::with_ports(
            config,
            submission_port as Arc<dyn SubmissionPort>,
            download_sink as Arc<dyn DownloadSink>,
        ))
    }

    /// Build a container around caller-supplied ports
    pub fn with_ports(
        config: PanelConfig,
        submission_port: Arc<dyn SubmissionPort>,
        download_sink: Arc<dyn DownloadSink>,
    ) -> Self {
        let submit_interactor = Arc::new(SubmitInteractor::new(submission_port, download_sink));
        Self {
            config,
            submit_interactor,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Panel coordinator wired to the given player platform and range widget
    pub fn coordinator(
        &self,
        player_service: Box<dyn PlayerService>,
        widget_factory: Box<dyn RangeWidgetFactory>,
    ) -> TrimCoordinator {
        TrimCoordinator::new(player_service, widget_factory, &self.config)
    }
}

impl AppContainer for DefaultAppContainer {
    fn submit_interactor(&self) -> Arc<SubmitInteractor> {
        Arc::clone(&self.submit_interactor)
    }
}
