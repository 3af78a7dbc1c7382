//! Success toast overlay

use crate::state::{ToastState, SUCCESS_MESSAGE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Toast height in rows when fully shown
pub const TOAST_HEIGHT: u16 = 3;

/// Rows of the toast hidden above the top edge for an animation offset.
///
/// At most the top border is hidden, so the message row is always on screen.
fn hidden_rows(offset: f32) -> u16 {
    (offset.round().max(0.0) as u16).min(TOAST_HEIGHT - 2)
}

/// Where the toast sits: top-right corner, revealed from the top edge
fn toast_area(area: Rect, offset: f32) -> Rect {
    let width = (SUCCESS_MESSAGE.chars().count() as u16 + 6).min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y,
        width,
        height: (TOAST_HEIGHT - hidden_rows(offset)).min(area.height),
    }
}

/// Render the success toast in the top-right corner
pub fn render_toast(frame: &mut Frame, toast: &ToastState) {
    let area = toast_area(frame.area(), toast.offset);
    // The top border is still above the edge while sliding in
    let borders = if hidden_rows(toast.offset) > 0 {
        Borders::ALL - Borders::TOP
    } else {
        Borders::ALL
    };

    let content = Line::from(vec![
        Span::styled("✔ ", Style::default().fg(Color::White)),
        Span::styled(
            SUCCESS_MESSAGE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let toast_widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().bg(Color::Green));

    frame.render_widget(Clear, area);
    frame.render_widget(toast_widget, area);
}
