use crate::app::AppEvent;
use crate::engine::config::WindowConfig;
use ratatui::layout::{Constraint, Layout, Position, Rect};

const TOP_BAR_HEIGHT: u16 = 1;
const BUTTON_BAR_HEIGHT: u16 = 3;

/// Regions of the reader window. Shared by drawing and mouse hit-testing so
/// a click always lands on what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub top_bar: Rect,
    pub button_bar: Rect,
    pub decrease_button: Rect,
    pub increase_button: Rect,
    pub body: Rect,
    /// Single row in the middle of the body holding the token
    pub token_line: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, window: &WindowConfig) -> Self {
        let [top_bar, button_bar, body] = Layout::vertical([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Length(BUTTON_BAR_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        let width = window.button_width.min(button_bar.width / 2);
        let center = button_bar.x + button_bar.width / 2;
        let half_gap = window.button_gap / 2;

        let decrease_x = center
            .saturating_sub(half_gap)
            .saturating_sub(width)
            .max(button_bar.x);
        let increase_x = (center + half_gap).min(button_bar.right().saturating_sub(width));

        let decrease_button =
            Rect::new(decrease_x, button_bar.y, width, button_bar.height).intersection(button_bar);
        let increase_button =
            Rect::new(increase_x, button_bar.y, width, button_bar.height).intersection(button_bar);

        let token_line = if body.height == 0 {
            body
        } else {
            Rect::new(body.x, body.y + body.height / 2, body.width, 1)
        };

        Self {
            top_bar,
            button_bar,
            decrease_button,
            increase_button,
            body,
            token_line,
        }
    }

    /// Maps a click at (`column`, `row`) to the button under it.
    pub fn hit_test(&self, column: u16, row: u16) -> AppEvent {
        let position = Position::new(column, row);
        if self.decrease_button.contains(position) {
            AppEvent::DecreaseWpm
        } else if self.increase_button.contains(position) {
            AppEvent::IncreaseWpm
        } else {
            AppEvent::None
        }
    }
}
