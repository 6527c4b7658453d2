//! Error handling module for the TrimX panel

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Status text for transport failures
pub const NETWORK_FAILURE_MESSAGE: &str = "Network issue or server unreachable.";

/// Status text when the endpoint fails without an error field
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Unknown error occurred.";

/// Main error type for panel operations
#[derive(Error, Debug)]
pub enum PanelError {
    /// URL carries no recognizable video reference
    #[error("No video reference found in URL: {url}")]
    InvalidUrl { url: String },

    /// Submission attempted without confirming download rights
    #[error("You must confirm your legal right to download.")]
    UserAgreementMissing,

    /// A submission is already pending
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Endpoint answered with a non-success status
    #[error("Submission failed: {message}")]
    SubmissionFailed { message: String },

    /// Request never reached the endpoint or the response was cut off
    #[error("Network failure: {message}")]
    Network { message: String },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PanelError {
    /// Text shown in the status line for this error
    pub fn status_message(&self) -> String {
        match self {
            PanelError::SubmissionFailed { message } => format!("Error: {}", message),
            PanelError::Network { .. } => format!("Error: {}", NETWORK_FAILURE_MESSAGE),
            PanelError::UserAgreementMissing => self.to_string(),
            PanelError::InvalidUrl { .. } => "Please enter a YouTube URL.".to_string(),
            other => format!("Error: {}", other),
        }
    }
}

impl From<reqwest::Error> for PanelError {
    fn from(error: reqwest::Error) -> Self {
        PanelError::Network {
            message: error.to_string(),
        }
    }
}

/// Result type alias for panel operations
pub type PanelResult<T> = std::result::Result<T, PanelError>;
