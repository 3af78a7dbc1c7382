//! Modal error dialog

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Maximum width of the dialog
const DIALOG_MAX_WIDTH: u16 = 60;

/// Center a `width` x `height` box inside `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Rows needed to show `message` wrapped at `inner_width`
fn wrapped_height(message: &str, inner_width: u16) -> u16 {
    let inner_width = inner_width.max(1) as usize;
    message
        .split('\n')
        .map(|line| line.chars().count().max(1).div_ceil(inner_width) as u16)
        .sum()
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();
    let width = DIALOG_MAX_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4); // borders + padding
    // title, blank, message, blank, hint, borders
    let height = 2 + wrapped_height(error_message, inner_width) + 2 + 2;
    let dialog_area = centered_rect(area, width, height);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error_message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", key),
            Span::raw(" or "),
            Span::styled("Esc", key),
            Span::raw(" to dismiss"),
        ]),
    ];

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black));

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}
