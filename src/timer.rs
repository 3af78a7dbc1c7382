//! Deferred application events
//!
//! The success toast is dismissed by a tokio task that sleeps and then posts
//! an `AppEvent` back to the app. The task is owned by `DismissTimer` and is
//! aborted when rescheduled or dropped, so nothing fires into a torn-down app.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Events delivered to the app from background tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The toast scheduled under `generation` has run its course
    ToastExpired { generation: u64 },
}

/// Cancellable one-shot timer for the success toast
#[derive(Debug, Default)]
pub struct DismissTimer {
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl DismissTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the most recent schedule
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an event carrying `generation` belongs to the live schedule
    pub fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    /// Schedule a `ToastExpired` event after `delay`, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, delay: Duration, events: UnboundedSender<AppEvent>) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;

        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the app shuts down
            let _ = events.send(AppEvent::ToastExpired { generation });
        }));

        tracing::debug!(generation, "Scheduled toast dismissal in {delay:?}");
        generation
    }

    /// Abort the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Mark the schedule as fired
    pub fn complete(&mut self) {
        self.handle = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
