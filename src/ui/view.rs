use crate::app::RenderState;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const DECREASE_LABEL: &str = "--";
pub const INCREASE_LABEL: &str = "++";

pub fn render_screen(frame: &mut Frame, layout: &ScreenLayout, state: &RenderState) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        frame.area(),
    );
    frame.render_widget(render_wpm_bar(&state.wpm_label), layout.top_bar);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::top_bar())),
        layout.button_bar,
    );
    frame.render_widget(render_button(DECREASE_LABEL), layout.decrease_button);
    frame.render_widget(render_button(INCREASE_LABEL), layout.increase_button);
    frame.render_widget(
        render_token(&state.token, layout.token_line.width),
        layout.token_line,
    );
}

pub fn render_wpm_bar(label: &str) -> Paragraph<'static> {
    Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::text()).bg(colors::top_bar()))
}

pub fn render_button(label: &'static str) -> Paragraph<'static> {
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::button())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::top_bar()))
}

pub fn render_token(token: &str, width: u16) -> Paragraph<'static> {
    Paragraph::new(fit_token(token, width as usize).into_owned())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors::text())
                .bg(colors::background())
                .add_modifier(Modifier::BOLD),
        )
}

/// Cuts `token` to `width` display columns, ending in '…' when shortened.
/// Grapheme clusters are never split.
pub fn fit_token(token: &str, width: usize) -> Cow<'_, str> {
    if token.width() <= width {
        return Cow::Borrowed(token);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let budget = width - 1;
    let mut used = 0;
    let mut fitted = String::new();
    for grapheme in token.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        used += w;
        fitted.push_str(grapheme);
    }
    fitted.push('…');
    Cow::Owned(fitted)
}
