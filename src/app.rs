//! Application state and core logic

use crate::sink::{SubmissionRecord, SubmissionSink};
use crate::state::{AppState, FieldId, Form, TOAST_DURATION};
use crate::timer::{AppEvent, DismissTimer};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where valid submissions are recorded
    sink: Box<dyn SubmissionSink>,
    /// Pending success toast dismissal
    toast_timer: DismissTimer,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(sink: Box<dyn SubmissionSink>, show_pin: bool) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(show_pin),
            sink,
            toast_timer: DismissTimer::new(),
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Format, validate and store a value for one field
    pub fn set_field(&mut self, id: FieldId, value: &str) {
        self.state.form.set_field(id, value);
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.push_char(ch);
        }
    }

    /// Delete the last character (or digit) of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    pub fn clear_active_field(&mut self) {
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.clear();
        }
    }

    pub fn next_field(&mut self) {
        self.state.form.next_field();
        self.log_focus();
    }

    pub fn prev_field(&mut self) {
        self.state.form.prev_field();
        self.log_focus();
    }

    fn log_focus(&self) {
        match self.state.form.active_field_id() {
            Some(field) => tracing::debug!(%field, "Focus moved"),
            None => tracing::debug!("Focus moved to submit"),
        }
    }

    pub fn toggle_pin_visibility(&mut self) {
        self.state.toggle_pin_visibility();
    }

    pub fn is_submittable(&self) -> bool {
        self.state.is_submittable()
    }

    /// Submit the form.
    ///
    /// Does nothing unless every field is valid. On success the form is
    /// reset and the toast is shown until its dismissal timer fires. A sink
    /// failure keeps the entered values and raises the error dialog.
    pub async fn submit(&mut self) {
        if !self.is_submittable() {
            tracing::debug!("Submit ignored, form is not valid");
            return;
        }

        self.state.is_submitting = true;
        let record = SubmissionRecord::from_form(&self.state.form);
        let result = self.sink.record(&record).await;
        self.state.is_submitting = false;

        match result {
            Ok(()) => {
                tracing::info!("Entry submitted");
                self.state.form.reset();
                self.state.show_success();
                self.toast_timer
                    .schedule(TOAST_DURATION, self.events_tx.clone());
            }
            Err(err) => {
                tracing::error!("Failed to record submission: {err}");
                self.push_error(format!("Failed to record submission: {err}"));
            }
        }
    }

    /// Apply an event posted by a background task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ToastExpired { generation } => {
                if self.toast_timer.is_current(generation) {
                    self.toast_timer.complete();
                    self.state.hide_success();
                } else {
                    tracing::debug!(
                        generation,
                        current = self.toast_timer.generation(),
                        "Ignoring stale toast expiry"
                    );
                }
            }
        }
    }

    /// Apply every queued event without blocking. Returns how many were applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Advance the toast slide-in animation
    pub fn update_toast(&mut self, toast_height: u16) {
        if let Some(ref mut toast) = self.state.toast {
            toast.update(toast_height);
        }
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shortcut = key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER);
        let on_submit_row = self.state.form.is_submit_row_active();

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('p') if ctrl || shortcut => self.toggle_pin_visibility(),
            KeyCode::Char('u') if ctrl => self.clear_active_field(),
            KeyCode::Enter if on_submit_row => self.submit().await,
            KeyCode::Enter => self.next_field(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input_char(c, key.modifiers.contains(KeyModifiers::SHIFT))
            }
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MockSubmissionSink, SinkError};
    use crate::state::{EntryForm, FieldStatus};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn accepting_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().returning(|_| Ok(()));
        sink
    }

    fn capturing_sink() -> (MockSubmissionSink, Arc<Mutex<Vec<SubmissionRecord>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink_captured = Arc::clone(&captured);
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().returning(move |entry| {
            sink_captured.lock().unwrap().push(entry.clone());
            Ok(())
        });
        (sink, captured)
    }

    fn app_with(sink: MockSubmissionSink) -> App {
        App::new(Box::new(sink), false)
    }

    fn fill(app: &mut App) {
        app.set_field(FieldId::FirstName, "John");
        app.set_field(FieldId::LastName, "Smith");
        app.set_field(FieldId::Phone, "5551234567");
        app.set_field(FieldId::Email, "j@x.com");
        app.set_field(FieldId::AirFryerCost, "49.99");
        app.set_field(FieldId::SpidrPin, "1234567890123456");
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_full_scenario() {
            let (sink, captured) = capturing_sink();
            let mut app = app_with(sink);
            fill(&mut app);

            assert_eq!(app.state.form.phone.value(), "(555) 123-4567");
            assert_eq!(app.state.form.spidr_pin.value(), "1234-5678-9012-3456");
            assert!(app.is_submittable());

            app.submit().await;

            let records = captured.lock().unwrap().clone();
            assert_eq!(records.len(), 1);
            let record = &records[0];
            assert_eq!(record.first_name, "John");
            assert_eq!(record.last_name, "Smith");
            assert_eq!(record.phone, "(555) 123-4567");
            assert_eq!(record.email, "j@x.com");
            assert_eq!(record.air_fryer_cost, "$49.99");
            let pin = STANDARD.decode(&record.spidr_pin).unwrap();
            assert_eq!(String::from_utf8(pin).unwrap(), "1234-5678-9012-3456");

            assert!(app.state.is_success_visible());
            assert!(!app.state.is_submitting);
            assert!(app
                .state
                .form
                .fields()
                .all(|f| f.value().is_empty() && f.status() == &FieldStatus::Pristine));
            assert!(!app.is_submittable());
        }

        #[tokio::test]
        async fn test_invalid_form_is_a_noop() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_record().never();
            let mut app = app_with(sink);
            fill(&mut app);
            app.set_field(FieldId::AirFryerCost, "0");

            app.submit().await;

            assert!(!app.state.is_success_visible());
            assert!(!app.state.has_errors());
            assert_eq!(app.state.form.first_name.value(), "John");
        }

        #[tokio::test]
        async fn test_empty_form_is_a_noop() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_record().never();
            let mut app = app_with(sink);

            app.handle_key(ctrl('s')).await.unwrap();
            assert!(!app.state.is_success_visible());
        }

        #[tokio::test]
        async fn test_sink_failure_keeps_values_and_reports() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_record()
                .times(1)
                .returning(|_| Err(SinkError::Io(std::io::Error::other("disk full"))));
            let mut app = app_with(sink);
            fill(&mut app);

            app.submit().await;

            assert!(!app.state.is_submitting);
            assert!(!app.state.is_success_visible());
            assert_eq!(app.state.form.first_name.value(), "John");
            assert!(app.is_submittable());
            assert_eq!(
                app.state.current_error(),
                Some("Failed to record submission: failed to write submission: disk full")
            );
        }
    }

    mod toast {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_hides_three_seconds_after_submit() {
            let mut app = app_with(accepting_sink());
            fill(&mut app);
            let start = tokio::time::Instant::now();
            app.submit().await;
            assert!(app.state.is_success_visible());

            tokio::time::sleep(Duration::from_millis(2500)).await;
            // Typing during the window does not affect the toast
            type_str(&mut app, "Jane").await;
            assert_eq!(app.drain_events(), 0);
            assert!(app.state.is_success_visible());

            let event = app.events_rx.recv().await.unwrap();
            let elapsed = start.elapsed();
            assert!(elapsed >= TOAST_DURATION, "fired early: {elapsed:?}");
            assert!(elapsed < TOAST_DURATION + Duration::from_millis(10));

            app.handle_event(event);
            assert!(!app.state.is_success_visible());
            assert_eq!(app.state.form.first_name.value(), "Jane");
        }

        #[tokio::test(start_paused = true)]
        async fn test_hides_exactly_once() {
            let mut app = app_with(accepting_sink());
            fill(&mut app);
            app.submit().await;

            tokio::time::sleep(Duration::from_millis(3001)).await;
            assert_eq!(app.drain_events(), 1);
            assert!(!app.state.is_success_visible());

            tokio::time::sleep(Duration::from_secs(30)).await;
            assert_eq!(app.drain_events(), 0);
        }

        #[tokio::test(start_paused = true)]
        async fn test_resubmit_restarts_window() {
            let mut app = app_with(accepting_sink());
            fill(&mut app);
            app.submit().await;

            tokio::time::sleep(Duration::from_secs(1)).await;
            fill(&mut app);
            app.submit().await;

            // First window would have ended here
            tokio::time::sleep(Duration::from_millis(2500)).await;
            app.drain_events();
            assert!(app.state.is_success_visible());

            tokio::time::sleep(Duration::from_millis(600)).await;
            app.drain_events();
            assert!(!app.state.is_success_visible());
        }

        #[tokio::test]
        async fn test_stale_generation_is_ignored() {
            let mut app = app_with(accepting_sink());
            fill(&mut app);
            app.submit().await;

            app.handle_event(AppEvent::ToastExpired { generation: 0 });
            assert!(app.state.is_success_visible());
        }

        #[tokio::test(start_paused = true)]
        async fn test_teardown_cancels_dismissal() {
            let mut app = app_with(accepting_sink());
            fill(&mut app);
            app.submit().await;
            assert!(app.toast_timer.is_pending());

            let App {
                toast_timer,
                events_rx: mut rx,
                events_tx,
                ..
            } = app;
            drop(events_tx);
            drop(toast_timer);

            tokio::time::sleep(Duration::from_secs(10)).await;
            assert_eq!(rx.recv().await, None);
        }
    }

    mod keys {
        use super::*;

        #[tokio::test]
        async fn test_typing_formats_phone() {
            let mut app = app_with(accepting_sink());
            app.state.form.focus(FieldId::Phone);
            type_str(&mut app, "555123").await;
            assert_eq!(app.state.form.phone.value(), "(555) 123");
            type_str(&mut app, "4567").await;
            assert_eq!(app.state.form.phone.value(), "(555) 123-4567");
            assert!(app.state.form.phone.is_valid());
        }

        #[tokio::test]
        async fn test_shift_uppercases() {
            let mut app = app_with(accepting_sink());
            app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::SHIFT))
                .await
                .unwrap();
            assert_eq!(app.state.form.first_name.value(), "J");
        }

        #[tokio::test]
        async fn test_backspace_on_pin() {
            let mut app = app_with(accepting_sink());
            app.state.form.focus(FieldId::SpidrPin);
            type_str(&mut app, "12345").await;
            assert_eq!(app.state.form.spidr_pin.value(), "1234-5");
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.form.spidr_pin.value(), "1234");
        }

        #[tokio::test]
        async fn test_tab_and_enter_cycle_focus() {
            let mut app = app_with(accepting_sink());
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.form.active_field_id(), Some(FieldId::LastName));
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.form.active_field_id(), Some(FieldId::Phone));
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Up)).await.unwrap();
            assert_eq!(app.state.form.active_field_id(), Some(FieldId::FirstName));
        }

        #[tokio::test]
        async fn test_enter_on_submit_row_submits() {
            let (sink, captured) = capturing_sink();
            let mut app = app_with(sink);
            fill(&mut app);
            app.state.form.focus_submit();

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(captured.lock().unwrap().len(), 1);
            assert!(app.state.is_success_visible());
            assert_eq!(app.state.form.active_field_index, 0);
        }

        #[tokio::test]
        async fn test_typing_on_submit_row_is_ignored() {
            let mut app = app_with(accepting_sink());
            app.state.form.set_active_field(EntryForm::SUBMIT_ROW);
            type_str(&mut app, "abc").await;
            assert!(app.state.form.fields().all(|f| f.value().is_empty()));
        }

        #[tokio::test]
        async fn test_cost_rejects_letters() {
            let mut app = app_with(accepting_sink());
            app.state.form.focus(FieldId::AirFryerCost);
            type_str(&mut app, "4x9.9y9").await;
            assert_eq!(app.state.form.air_fryer_cost.value(), "49.99");
        }

        #[tokio::test]
        async fn test_ctrl_p_toggles_pin() {
            let mut app = app_with(accepting_sink());
            app.handle_key(ctrl('p')).await.unwrap();
            assert!(app.state.show_pin);
            // Control chords never reach the field
            assert_eq!(app.state.form.first_name.value(), "");
        }

        #[tokio::test]
        async fn test_ctrl_u_clears_field() {
            let mut app = app_with(accepting_sink());
            type_str(&mut app, "John").await;
            app.handle_key(ctrl('u')).await.unwrap();
            assert_eq!(app.state.form.first_name.value(), "");
            assert_eq!(
                app.state.form.first_name.error_message(),
                "First name is required"
            );
        }

        #[tokio::test]
        async fn test_quit_keys() {
            let mut app = app_with(accepting_sink());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.should_quit());

            let mut app = app_with(accepting_sink());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app_with(accepting_sink());
            app.push_error("boom");

            type_str(&mut app, "abc").await;
            assert_eq!(app.state.form.first_name.value(), "");

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }
    }
}
