//! Error types for the grievance API layer

use thiserror::Error;

/// Failure talking to the grievance API
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reading or writing the persisted session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed session file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no data directory available for the session file")]
    NoDataDir,
}
