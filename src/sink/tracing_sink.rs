//! Sink that writes submissions to the diagnostic log

use super::error::SinkError;
use super::record::SubmissionRecord;
use super::traits::SubmissionSink;
use async_trait::async_trait;

/// Emits each submission as a structured `info` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn record(&self, entry: &SubmissionRecord) -> Result<(), SinkError> {
        let payload = serde_json::to_string(entry)?;
        tracing::info!(
            target: "spidr_entry::submission",
            record = %payload,
            "Form submitted"
        );
        Ok(())
    }
}
