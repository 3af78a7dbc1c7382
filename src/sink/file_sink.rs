//! JSON-lines file sink
//!
//! Each submission is appended as one line:
//! `{"id": "...", "submittedAt": "...", "entry": {...}}`

use super::error::SinkError;
use super::record::SubmissionRecord;
use super::traits::SubmissionSink;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionEnvelope<'a> {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    entry: &'a SubmissionRecord,
}

/// Appends submissions to a file, one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    /// Serializes appends from concurrent callers
    write_lock: Mutex<()>,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionSink for JsonLinesSink {
    async fn record(&self, entry: &SubmissionRecord) -> Result<(), SinkError> {
        let envelope = SubmissionEnvelope {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            entry,
        };
        let mut line = serde_json::to_string(&envelope)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(id = %envelope.id, "Appended submission to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(first_name: &str) -> SubmissionRecord {
        SubmissionRecord {
            first_name: first_name.to_string(),
            last_name: "Smith".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "j@x.com".to_string(),
            air_fryer_cost: "$49.99".to_string(),
            spidr_pin: "MTIzNC01Njc4LTkwMTItMzQ1Ng==".to_string(),
        }
    }

    #[tokio::test]
    async fn test_appends_one_line_per_submission() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesSink::new(dir.path().join("entries.jsonl"));

        sink.record(&entry("John")).await.unwrap();
        sink.record(&entry("Jane")).await.unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first["entry"]["firstName"], "John");
        assert_eq!(second["entry"]["firstName"], "Jane");
        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_envelope_contains_full_record() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesSink::new(dir.path().join("entries.jsonl"));
        sink.record(&entry("John")).await.unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let line: serde_json::Value = serde_json::from_str(content.trim_end()).unwrap();
        let parsed: SubmissionRecord = serde_json::from_value(line["entry"].clone()).unwrap();
        assert_eq!(parsed, entry("John"));

        let submitted_at = line["submittedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(submitted_at).is_ok());
        assert!(Uuid::parse_str(line["id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("entries.jsonl");
        let sink = JsonLinesSink::new(&path);

        sink.record(&entry("John")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_directory_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesSink::new(dir.path());

        let err = sink.record(&entry("John")).await.unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
        assert!(err.to_string().starts_with("failed to write submission"));
    }
}
