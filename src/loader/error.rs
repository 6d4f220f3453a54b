//! Loader error types

use thiserror::Error;

/// Errors that end a dashboard load.
///
/// The `Display` form is the message shown on the failed page; a non-success
/// response shows only its status text.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The report service answered with a non-success status
    #[error("{status_text}")]
    Status { status: u16, status_text: String },

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    /// The response body is not a dashboard plan
    #[error("Invalid dashboard plan: {0}")]
    Decode(String),

    /// The fallback plan could not be read
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl LoadError {
    /// Build a status error carrying the canonical reason phrase
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());

        LoadError::Status {
            status: status.as_u16(),
            status_text,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}

/// Result type alias for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
