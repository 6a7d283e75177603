use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, Focus},
    ui::{components::card::Card, theme::Theme},
};

const LABEL_WIDTH: usize = 13;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card = Card::new("Add expense", &theme).focused(state.focus.is_form_field());
    let inner = card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    let form = &state.page.form;
    let fields = [
        (Focus::Amount, form.amount.as_str(), "0.00"),
        (Focus::Category, form.category.as_str(), "e.g. Groceries"),
        (Focus::Description, form.description.as_str(), "optional"),
        (Focus::Date, form.date.as_str(), "YYYY-MM-DD"),
    ];

    for (row, (field, value, hint)) in rows.iter().zip(fields) {
        render_input(frame, *row, field, value, hint, state.focus == field, &theme);
    }
}

fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    field: Focus,
    value: &str,
    hint: &str,
    focused: bool,
    theme: &Theme,
) {
    let label_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.dim)
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$}", field.label(), width = LABEL_WIDTH),
        label_style,
    )];
    if value.is_empty() && !focused {
        spans.push(Span::styled(hint.to_string(), Style::default().fg(theme.border)));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(theme.text)));
    }
    if focused {
        spans.push(Span::styled("│", Style::default().fg(theme.accent)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
