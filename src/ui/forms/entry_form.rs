//! Entry form rendering

use super::field_renderer::{draw_field, draw_field_message, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldId, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "Behold: The SpidrFry™ 9000";
const PIN_HINT: &str = "Enter your 16-digit PIN like 1234-5678-9012-3456";

/// Draw the giveaway entry form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let form = &state.form;

    let block = Block::default()
        .title(" Spidr ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    // Title, six (input + message) pairs, submit button, help text
    let mut constraints = vec![Constraint::Length(2)];
    for _ in FieldId::ALL {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    for id in FieldId::ALL {
        let field = form.field(id);
        let row = 1 + id.index() * 2;
        let is_active = form.active_field() == id.index();
        let masked = id == FieldId::SpidrPin && !state.show_pin;
        let hint = (id == FieldId::SpidrPin).then_some(PIN_HINT);

        draw_field(frame, chunks[row], field, is_active, masked);
        draw_field_message(frame, chunks[row + 1], field, hint);
    }

    let button_row = 1 + FieldId::ALL.len() * 2;
    let label = if state.is_submitting {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(
        frame,
        chunks[button_row],
        label,
        form.is_submit_row_active(),
        state.is_submittable(),
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": submit  "),
        Span::styled(
            crate::platform::CLEAR_FIELD_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": clear"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[button_row + 1]);
}
