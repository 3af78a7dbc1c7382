//! Layout helpers (form card, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form card grows, in columns
pub const CARD_MAX_WIDTH: u16 = 64;

/// Split the screen into the centered card column and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(rows[0]);

    (card, rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let (label, color) = if state.is_submitting {
        ("SUBMITTING", Color::Yellow)
    } else if state.is_submittable() {
        ("READY", Color::Green)
    } else {
        ("INCOMPLETE", Color::DarkGray)
    };

    let valid = state.form.fields().filter(|f| f.is_valid()).count();
    let total = state.form.fields().count();

    let line = Line::from(vec![
        Span::styled(format!(" {label} "), Style::default().fg(Color::Black).bg(color)),
        Span::raw(format!(" {valid}/{total} fields valid  ")),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
