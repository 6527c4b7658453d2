// Submit interactor - Sends a trim request and stores the returned file

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::model::*;
use crate::domain::rules::SubmissionRules;
use crate::error::PanelResult;
use crate::ports::*;

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    pub filename: String,
    pub saved_to: PathBuf,
    pub size: u64,
}

/// Interactor for the submission use case
pub struct SubmitInteractor {
    submission_port: Arc<dyn SubmissionPort>,
    download_sink: Arc<dyn DownloadSink>,
}

impl SubmitInteractor {
    /// Create new submit interactor with injected ports
    pub fn new(submission_port: Arc<dyn SubmissionPort>, download_sink: Arc<dyn DownloadSink>) -> Self {
        Self {
            submission_port,
            download_sink,
        }
    }

    /// Validate, send and save
    pub async fn execute(&self, submission: &TrimSubmission) -> PanelResult<SubmitReport> {
        SubmissionRules::validate(submission)?;

        let file = self.submission_port.submit(submission).await?;
        let saved_to = self.download_sink.save(&file).await?;
        let size = file.size();

        info!(filename = %file.filename, path = %saved_to.display(), size, "submission saved");
        Ok(SubmitReport {
            filename: file.filename,
            saved_to,
            size,
        })
    }
}
