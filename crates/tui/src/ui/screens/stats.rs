use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard, container_notice},
            money::styled_amount,
        },
        theme::Theme,
    },
    view::Container,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let stats = &state.page.stats;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Totals
            Constraint::Min(0),    // Category breakdown
        ])
        .split(area);

    let totals = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[0]);

    StatCard::new("Total", &stats.total_stat, &theme).render(frame, totals[0]);
    StatCard::new("This month", &stats.monthly_stat, &theme).render(frame, totals[1]);

    render_categories(frame, layout[1], &stats.category_list, &theme);
}

fn render_categories(
    frame: &mut Frame<'_>,
    area: Rect,
    categories: &Container<crate::view::CategoryRow>,
    theme: &Theme,
) {
    let inner = Card::new("By category", theme).render_frame(frame, area);

    if let Some(notice) = container_notice(categories, theme) {
        frame.render_widget(notice, inner);
        return;
    }

    let width = inner.width as usize;
    let items = categories
        .items()
        .iter()
        .map(|row| {
            let pad = width
                .saturating_sub(row.label.chars().count() + row.amount.chars().count())
                .max(1);
            ListItem::new(Line::from(vec![
                Span::styled(row.label.clone(), Style::default().fg(theme.text)),
                Span::raw(" ".repeat(pad)),
                styled_amount(&row.amount, theme),
            ]))
        })
        .collect::<Vec<_>>();

    frame.render_widget(List::new(items), inner);
}
