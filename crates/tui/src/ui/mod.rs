pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;

pub use terminal::{
    AppTerminal as Terminal, restore_terminal, setup_terminal, spawn_event_reader,
};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    render_page(frame, layout[1], state);
    render_bottom_bar(frame, layout[2], state, &theme);

    if state.pending_delete.is_some() {
        components::dialog::render(
            frame,
            area,
            components::dialog::DialogKind::Confirm,
            crate::commands::DELETE_PROMPT,
            &theme,
        );
    }
    if let Some(message) = state.alert {
        components::dialog::render(
            frame,
            area,
            components::dialog::DialogKind::Alert,
            message,
            &theme,
        );
    }
}

fn render_page(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Add form (4 inputs + borders)
            Constraint::Min(0),    // Statistics
        ])
        .split(columns[0]);

    screens::form::render(frame, left[0], state);
    screens::stats::render(frame, left[1], state);
    screens::expenses::render(frame, columns[1], state);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            "Expense Tracker",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Backend", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.base_url)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    use components::hints;

    let context = if state.focus.is_form_field() {
        hints::form_hints()
    } else {
        hints::list_hints()
    };

    let mut parts = hints::hints_to_spans(&context, theme);
    parts.push(hints::hint_separator(theme));
    parts.extend(hints::hints_to_spans(&hints::global_hints(), theme));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
