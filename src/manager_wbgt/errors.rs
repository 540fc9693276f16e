use reqwest::StatusCode;
use thiserror::Error;

/// Error depicting errors that occur while retrieving a snapshot
///
#[derive(Debug, Error)]
pub enum WbgtError {
    #[error("ClientError: {0}")]
    ClientError(String),
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("StatusError: {status} for url ({url})")]
    StatusError { status: StatusCode, url: String },
}
