use thiserror::Error;
use crate::initialization::InitializationError;
use crate::worker::WorkerError;

/// Error depicting anything that stops a snapshot update, from startup to the saved file
///
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Initialization failed: {0}")]
    Initialization(#[from] InitializationError),
    #[error("{0}")]
    Worker(#[from] WorkerError),
}
