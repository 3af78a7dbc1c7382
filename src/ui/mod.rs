//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use components::TOAST_HEIGHT;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (card_area, status_area) = layout::create_layout(frame.area());

    forms::draw_entry_form(frame, card_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays
    if let Some(ref toast) = app.state.toast {
        components::render_toast(frame, toast);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
