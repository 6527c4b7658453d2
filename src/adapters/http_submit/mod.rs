// HTTP submission adapter - Sends trim requests to the processing endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_DISPOSITION;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::error::{PanelError, PanelResult, UNKNOWN_FAILURE_MESSAGE};
use crate::ports::*;
use crate::utils::filename::FilenameUtils;

/// Error body returned by the endpoint on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// reqwest-backed [`SubmissionPort`]
pub struct HttpSubmissionAdapter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionAdapter {
    /// Create an adapter for the service at `endpoint` (base URL, without `/download`)
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> PanelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PanelError::Config {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create an adapter reusing an existing client
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the download route
    pub fn download_url(&self) -> String {
        format!("{}/download", self.endpoint)
    }

    /// Message carried by a failure body, or the generic fallback
    fn failure_message(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_FAILURE_MESSAGE.to_string())
    }
}

#[async_trait]
impl SubmissionPort for HttpSubmissionAdapter {
    async fn submit(&self, submission: &TrimSubmission) -> PanelResult<DownloadedFile> {
        let url = self.download_url();
        info!(
            %url,
            format = %submission.format,
            quality = %submission.quality,
            start = %submission.start_time,
            end = %submission.end_time,
            "sending trim request"
        );

        let response = self.client.post(&url).json(submission).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::failure_message(&body);
            warn!(status = status.as_u16(), %message, "trim request rejected");
            return Err(PanelError::SubmissionFailed { message });
        }

        let header = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let filename = FilenameUtils::from_content_disposition(header.as_deref());
        let bytes = response.bytes().await?;

        debug!(%filename, size = bytes.len(), "trim response received");
        Ok(DownloadedFile::new(filename, bytes.to_vec()))
    }
}
