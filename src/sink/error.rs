//! Sink error types

use thiserror::Error;

/// Failure to record a submission
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write submission: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize submission: {0}")]
    Serialize(#[from] serde_json::Error),
}
