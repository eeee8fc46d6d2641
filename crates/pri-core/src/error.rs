//! Error types for the PRI site coordinator

use std::time::Duration;

use thiserror::Error;

/// Main error type for site coordinator operations
///
/// None of these are fatal to the page: every variant degrades to the mail
/// fallback or to a logged no-op.
#[derive(Error, Debug)]
pub enum SiteError {
    /// In-page anchor whose fragment resolves to no element
    #[error("Anchor target not found: {0}")]
    TargetNotFound(String),

    /// The email relay settled with a rejection
    #[error("Email relay rejected the message: {0}")]
    RelayRejected(String),

    /// The email relay threw while initializing or sending
    #[error("Email relay failed: {0}")]
    RelayException(String),

    /// A relay identifier still holds its placeholder value
    #[error("Email relay is not configured: {0} still holds a placeholder")]
    RelayNotConfigured(&'static str),

    /// The email relay never settled within the configured window
    #[error("Email relay did not answer within {0:?}")]
    RelayTimeout(Duration),

    /// Submit received while a previous submission is pending
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Site configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failure reported across the email relay boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// Asynchronous rejection from the relay
    #[error("rejected: {0}")]
    Rejected(String),

    /// Synchronous fault during init or invocation
    #[error("exception: {0}")]
    Exception(String),
}

impl From<RelayError> for SiteError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Rejected(msg) => SiteError::RelayRejected(msg),
            RelayError::Exception(msg) => SiteError::RelayException(msg),
        }
    }
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
