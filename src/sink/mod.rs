//! Submission sinks
//!
//! A sink receives one `SubmissionRecord` per valid submission. The default
//! sink writes the record to the tracing log; a JSON-lines file sink can be
//! configured instead.

mod error;
mod file_sink;
mod record;
mod traits;
mod tracing_sink;

pub use error::SinkError;
pub use file_sink::JsonLinesSink;
pub use record::SubmissionRecord;
pub use traits::SubmissionSink;
pub use tracing_sink::TracingSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use std::path::PathBuf;

/// Pick the sink for the configured submissions file, if any
pub fn build_sink(submissions_file: Option<PathBuf>) -> Box<dyn SubmissionSink> {
    match submissions_file {
        Some(path) => {
            let sink = JsonLinesSink::new(path);
            tracing::info!("Recording submissions to {}", sink.path().display());
            Box::new(sink)
        }
        None => Box::new(TracingSink),
    }
}
