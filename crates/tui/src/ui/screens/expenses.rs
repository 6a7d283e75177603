use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{
            card::{Card, container_notice},
            money::styled_amount,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let focused = state.focus == Focus::Expenses;
    let inner = Card::new("Expenses", &theme)
        .focused(focused)
        .render_frame(frame, area);

    let container = &state.page.expenses_container;
    if let Some(notice) = container_notice(container, &theme) {
        frame.render_widget(notice, inner);
        return;
    }

    let items = container
        .items()
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{}:", card.category),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    styled_amount(&card.amount, &theme),
                    Span::raw("   "),
                    Span::styled(card.date.clone(), Style::default().fg(theme.dim)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", card.description),
                    Style::default().fg(theme.dim),
                )),
            ])
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    if focused && !items.is_empty() {
        list_state.select(Some(state.selected));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}
