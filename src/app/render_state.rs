use crate::app::mode::ReaderState;

/// Snapshot of what the window shows
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub state: ReaderState,
    pub token: String,
    pub wpm: u32,
    pub wpm_label: String,
}

pub fn wpm_label(wpm: u32) -> String {
    format!("wpm: {}", wpm)
}
