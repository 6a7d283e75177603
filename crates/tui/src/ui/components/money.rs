use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Styled span for an already formatted amount.
///
/// Amounts the backend sent in an unusable shape (`$NaN`, `$Infinity`) and
/// negative ones are highlighted with the error color.
#[must_use]
pub fn styled_amount(formatted: &str, theme: &Theme) -> Span<'static> {
    let color = if is_suspicious(formatted) {
        theme.error
    } else {
        theme.positive
    };
    Span::styled(
        formatted.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn is_suspicious(formatted: &str) -> bool {
    let digits = formatted.trim_start_matches('$');
    digits.starts_with('-') || !digits.starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_unusable_amounts() {
        assert!(!is_suspicious("$12.30"));
        assert!(is_suspicious("$NaN"));
        assert!(is_suspicious("$Infinity"));
        assert!(is_suspicious("$-4.00"));
    }
}
