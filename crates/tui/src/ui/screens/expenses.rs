use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{app::AppState, ui::theme::Theme};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let block = Block::default()
        .title(" expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if state.expenses.items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No expenses recorded yet."))
                .style(Style::default().fg(theme.text_muted))
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let header = format_row("ID", "Date", "Description", "Category", "Amount");
    let mut items = vec![
        ListItem::new(Line::from(header)).style(Style::default().fg(theme.text_muted)),
    ];
    items.extend(state.expenses.items.iter().map(|expense| {
        let row = format_row(
            &expense.id.to_string(),
            &expense.date,
            &expense.description,
            &expense.category,
            &format!("{:.2}", expense.amount),
        );
        ListItem::new(Line::from(row))
    }));

    let mut list_state = ListState::default();
    // Row 0 is the header.
    list_state.select(Some(state.expenses.selected + 1));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn format_row(id: &str, date: &str, description: &str, category: &str, amount: &str) -> String {
    format!("{id:>4}  {date:<10}  {description:<32}  {category:<16}  {amount:>10}")
}
