//! Success toast state
//!
//! Visibility is driven by the dismissal timer; this type only tracks the
//! slide-in animation progress for rendering.

use std::time::{Duration, Instant};

/// How long the toast stays on screen after a successful submission
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Message shown in the toast
pub const SUCCESS_MESSAGE: &str = "Submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding down from the top edge
    SlideIn,
    /// Fully visible
    Shown,
}

/// Success toast animation state
#[derive(Debug, Clone)]
pub struct ToastState {
    /// When the toast was shown
    pub shown_at: Instant,
    pub phase: ToastPhase,
    /// Rows still hidden above the top edge
    pub offset: f32,
}

impl ToastState {
    /// Duration of the slide-in animation
    const SLIDE_DURATION: Duration = Duration::from_millis(300);

    pub fn new() -> Self {
        Self {
            shown_at: Instant::now(),
            phase: ToastPhase::SlideIn,
            offset: 1.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, toast_height: u16) {
        self.update_at(self.shown_at.elapsed(), toast_height);
    }

    fn update_at(&mut self, elapsed: Duration, toast_height: u16) {
        if elapsed < Self::SLIDE_DURATION {
            self.phase = ToastPhase::SlideIn;
            let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
            let eased = simple_easing::cubic_out(progress);
            self.offset = (1.0 - eased) * toast_height as f32;
        } else {
            self.phase = ToastPhase::Shown;
            self.offset = 0.0;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase == ToastPhase::SlideIn
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}
