use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application events
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppEvent {
    IncreaseWpm,
    DecreaseWpm,
    Quit,
    None,
}

impl AppEvent {
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => AppEvent::IncreaseWpm,
            KeyCode::Char('-') | KeyCode::Down => AppEvent::DecreaseWpm,
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            _ => AppEvent::None,
        }
    }
}
