//! Application state definitions

use super::forms::EntryForm;
use super::toast_state::ToastState;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: EntryForm,

    // UI flags
    pub is_submitting: bool,
    pub show_pin: bool,
    /// Present while the success toast is visible
    pub toast: Option<ToastState>,

    /// Errors waiting to be shown in the modal dialog, oldest first
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(show_pin: bool) -> Self {
        Self {
            show_pin,
            ..Default::default()
        }
    }

    /// Submit is enabled iff every field is valid and nothing is in flight
    pub fn is_submittable(&self) -> bool {
        self.form.all_valid() && !self.is_submitting
    }

    #[cfg(test)]
    pub fn is_success_visible(&self) -> bool {
        self.toast.is_some()
    }

    pub fn show_success(&mut self) {
        self.toast = Some(ToastState::new());
    }

    pub fn hide_success(&mut self) {
        self.toast = None;
    }

    pub fn toggle_pin_visibility(&mut self) {
        self.show_pin = !self.show_pin;
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
