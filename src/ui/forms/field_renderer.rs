//! Field rendering utilities for forms

use crate::state::{FieldId, FieldStatus, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one input box
pub const FIELD_HEIGHT: u16 = 3;

/// Border color for a field: validation status first, then focus
fn border_color(field: &FormField, is_active: bool) -> Color {
    match field.status() {
        FieldStatus::Invalid(_) => Color::Red,
        FieldStatus::Valid => Color::Green,
        FieldStatus::Pristine if is_active => Color::Cyan,
        FieldStatus::Pristine => Color::DarkGray,
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, masked: bool) {
    let display_value = field.display_value(masked);
    let cursor = if is_active { "▌" } else { "" };

    let mut spans = Vec::new();
    if field.id == FieldId::AirFryerCost {
        spans.push(Span::raw("$ "));
    }
    if display_value.is_empty() {
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            field.id.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(display_value, Style::default().fg(Color::White)));
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {} ", field.id.label()), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    if field.id == FieldId::SpidrPin {
        let eye = if masked { " show " } else { " hide " };
        let toggle_hint = Line::from(Span::styled(
            format!("{eye}{} ", crate::platform::TOGGLE_PIN_SHORTCUT),
            Style::default().fg(Color::DarkGray),
        ))
        .right_aligned();
        block = block.title_bottom(toggle_hint);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the line under a field: the error if there is one, else the hint
pub fn draw_field_message(frame: &mut Frame, area: Rect, field: &FormField, hint: Option<&str>) {
    let line = match (field.error(), hint) {
        (Some(err), _) => Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::LightRed),
        )),
        (None, Some(hint)) => Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::DarkGray),
        )),
        (None, None) => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}
