use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::{ui::theme::Theme, view::Container};

/// Rounded panel used for every region of the page.
pub struct Card<'a> {
    title: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            theme,
            focused: false,
        }
    }

    /// Mark this card as focused (uses accent border color).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(&self) -> Block<'a> {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };

        Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.theme.accent),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.surface))
    }

    /// Draws the frame and returns the area left for content.
    pub fn render_frame(&self, frame: &mut Frame<'_>, area: Rect) -> Rect {
        let block = self.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}

/// Single value with a label, used for the totals.
pub struct StatCard<'a> {
    title: &'a str,
    value: &'a str,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: &'a str, theme: &'a Theme) -> Self {
        Self { title, value, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let inner = Card::new(self.title, self.theme).render_frame(frame, area);
        let value = Paragraph::new(Line::from(Span::styled(
            self.value,
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(value, inner);
    }
}

/// Paragraph shown instead of a list when a container holds no items.
///
/// Returns `None` for `Container::Items`, which the caller renders itself.
pub fn container_notice<'a, T>(
    container: &'a Container<T>,
    theme: &Theme,
) -> Option<Paragraph<'a>> {
    let (text, style) = match container {
        Container::Items(_) => return None,
        Container::Pending => ("Loading…", Style::default().fg(theme.dim)),
        Container::Placeholder(text) => (*text, Style::default().fg(theme.dim)),
        Container::Failed(message) => (message.as_str(), Style::default().fg(theme.error)),
    };

    Some(
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
    )
}
