use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Blocking message, dismissed by any key.
    Alert,
    /// Yes/no question.
    Confirm,
}

/// Draws a modal box centered over `area`.
pub fn render(frame: &mut Frame<'_>, area: Rect, kind: DialogKind, message: &str, theme: &Theme) {
    let width = (message.chars().count() as u16 + 6)
        .max(34)
        .min(area.width);
    let height = 5u16.min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let (title, style, hint) = match kind {
        DialogKind::Alert => (
            " alert ",
            Style::default().fg(theme.error),
            "press any key",
        ),
        DialogKind::Confirm => (
            " confirm ",
            Style::default().fg(theme.accent),
            "y / Enter = yes   n / Esc = no",
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    let content = Paragraph::new(vec![
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(theme.dim))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(content, rect);
}
