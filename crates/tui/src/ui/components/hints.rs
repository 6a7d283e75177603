use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub fn form_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next field"),
        KeyHint::new("Enter", "add expense"),
    ]
}

pub fn list_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("↑↓", "select"),
        KeyHint::new("d", "delete"),
        KeyHint::new("r", "refresh"),
        KeyHint::new("Tab", "form"),
        KeyHint::new("q", "quit"),
    ]
}

pub fn global_hints() -> Vec<KeyHint> {
    vec![KeyHint::new("Ctrl+C", "quit")]
}
