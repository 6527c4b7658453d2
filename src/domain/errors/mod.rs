// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Time string does not match `MM:SS` or `H:MM:SS`
    InvalidFormat(String),
    /// Invalid time range
    InvalidTimeRange(String),
    /// Token is not a valid video reference
    InvalidVideoRef(String),
    /// Remote player reported a failure
    PlayerFail(String),
    /// Range widget reported a failure
    WidgetFail(String),
    /// Filesystem operation failed
    FsFail(String),
    /// Internal error
    InternalError(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            DomainError::InvalidTimeRange(msg) => write!(f, "Invalid time range: {}", msg),
            DomainError::InvalidVideoRef(msg) => write!(f, "Invalid video reference: {}", msg),
            DomainError::PlayerFail(msg) => write!(f, "Player failure: {}", msg),
            DomainError::WidgetFail(msg) => write!(f, "Range widget failure: {}", msg),
            DomainError::FsFail(msg) => write!(f, "Filesystem failure: {}", msg),
            DomainError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
