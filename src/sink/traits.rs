//! Trait abstraction for submission sinks to enable mocking in tests

use super::error::SinkError;
use super::record::SubmissionRecord;
use async_trait::async_trait;

/// Destination for submitted entries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Record one submission
    async fn record(&self, entry: &SubmissionRecord) -> Result<(), SinkError>;
}
