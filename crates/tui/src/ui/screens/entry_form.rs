use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::{AppState, FormField},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let block = Block::default()
        .title(" new expense ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
        ])
        .margin(0)
        .split(inner);

    render_input(frame, rows[0], state, FormField::Date, &theme);
    render_input(frame, rows[2], state, FormField::Description, &theme);
    render_input(frame, rows[4], state, FormField::Category, &theme);
    render_input(frame, rows[5], state, FormField::Amount, &theme);
}

fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    field: FormField,
    theme: &Theme,
) {
    let focused = state.form.focus == field;
    let value = state.form.value(field);
    let cursor = if focused { "│" } else { "" };

    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<20}", format!("{}:", field.label())),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
