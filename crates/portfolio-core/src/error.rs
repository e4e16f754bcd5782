//! Error types for the portfolio site

use thiserror::Error;

/// Message shown when the form endpoint rejects a submission without saying why.
pub const GENERIC_REJECTION_MESSAGE: &str = "Oops! There was a problem submitting your form.";

/// Message shown when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Errors from persisted state and configuration
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The key/value store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Failure of a contact-form submission.
///
/// Both kinds are surfaced inline next to the form and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No response was received (connection refused, DNS, aborted body)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("Submission rejected with status {status}")]
    Rejected {
        status: u16,
        /// Error text extracted from the response body, if any
        message: Option<String>,
    },
}

impl SubmitError {
    /// Text to display to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            SubmitError::Rejected { message: None, .. } => GENERIC_REJECTION_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(error: reqwest::Error) -> Self {
        SubmitError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for PortfolioError {
    fn from(error: serde_json::Error) -> Self {
        PortfolioError::Serialization(error.to_string())
    }
}
