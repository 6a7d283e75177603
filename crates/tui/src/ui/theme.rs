use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub positive: Color,
    pub error: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(110, 180, 110),
            error: Color::Rgb(200, 80, 80),
            border: Color::Rgb(70, 80, 90),
            border_focused: Color::Rgb(80, 160, 160),
        }
    }
}
