//! Transport-level failures talking to the summarization backend.
//!
//! Every variant ends up as `SummaryResult::Unreachable`; structured
//! `{error, detail}` replies are not errors at this layer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The reqwest client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection refused, reset, DNS failure, or body read failure
    #[error("Connection failed to '{endpoint}': {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the per-mode timeout
    #[error("Request to '{endpoint}' timed out after {seconds}s")]
    Timeout { endpoint: String, seconds: u64 },

    /// Non-2xx reply without a structured error body
    #[error("Backend returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not JSON
    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The selected PDF could not be read
    #[error("Failed to read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request could not be assembled
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Short machine-readable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode(_) => "decode_error",
            ApiError::File { .. } => "file_error",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }
}
