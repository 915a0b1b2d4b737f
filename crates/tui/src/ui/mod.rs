pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, entry form, expense table, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(8), // Entry form
            Constraint::Min(0),    // Expense table
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::entry_form::render(frame, layout[1], state);
    screens::expenses::render(frame, layout[2], state);
    render_bottom_bar(frame, layout[3], &theme);

    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let count = state.expenses.items.len();
    let (status, status_style) = match &state.store_error {
        None => ("OK", Style::default().fg(theme.positive)),
        Some(_) => ("ERR", Style::default().fg(theme.error)),
    };

    let mut line = vec![
        Span::styled("Store", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.database)),
        Span::styled("Records", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {count}  ")),
        Span::styled(status, status_style),
    ];

    if let Some(err) = &state.store_error {
        line.push(Span::raw("  "));
        line.push(Span::styled(err.as_str(), Style::default().fg(theme.error)));
    }

    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let parts = vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" next field  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" add expense  "),
        Span::styled("↑/↓", Style::default().fg(theme.accent)),
        Span::raw(" scroll  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
