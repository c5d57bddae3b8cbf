use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub top_bar: Color,
    pub text: Color,
    pub button: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::night()
    }
}

impl Theme {
    /// White on black with a dark teal top bar
    pub fn night() -> Self {
        Self {
            background: Color::Black,
            top_bar: Color::Rgb(0, 38, 51), // #002633
            text: Color::White,
            button: Color::Rgb(160, 170, 180),
        }
    }

    pub fn current() -> Self {
        Self::night()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn top_bar() -> Color {
        Theme::current().top_bar
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn button() -> Color {
        Theme::current().button
    }
}
