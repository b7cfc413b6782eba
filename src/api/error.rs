use std::path::PathBuf;
use thiserror::Error;

/// Failures of a call to the conversion backend.
///
/// Every variant is caught by the flow that issued the call and turned into
/// display text there.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("API responded with {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected
    #[error("could not parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The selected file could not be read before sending
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}
