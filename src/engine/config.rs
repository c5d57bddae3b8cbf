// Configuration for the reader controller and the terminal window.
// Defaults match the original desktop reader: 200 wpm, steps of 10.

use crate::engine::error::{ReaderError, Result};
use std::ops::RangeInclusive;

pub const DEFAULT_WPM: u32 = 200;
pub const DEFAULT_WPM_STEP: u32 = 10;
pub const FINISHED_MARKER: &str = "<Text has finished>";

/// Pacing configuration for a reading session
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Initial words per minute (default 200)
    pub wpm: u32,

    /// Amount added or removed by one press of a speed button (default 10)
    pub wpm_step: u32,

    /// Allowed WPM; changes outside it are clamped. The floor keeps WPM positive.
    pub wpm_range: RangeInclusive<u32>,

    /// Delay after a sentence-ending token, in milliseconds.
    /// `None` means sentence endings use the standard delay.
    pub end_of_sentence_delay_ms: Option<u64>,

    /// Text shown once the token source is exhausted
    pub finished_marker: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            wpm_step: DEFAULT_WPM_STEP,
            wpm_range: 1..=6000,
            end_of_sentence_delay_ms: None,
            finished_marker: FINISHED_MARKER.to_string(),
        }
    }
}

impl ReaderConfig {
    pub fn validate(&self) -> Result<()> {
        if *self.wpm_range.start() == 0 || self.wpm_range.is_empty() {
            return Err(ReaderError::InvalidInput(format!(
                "wpm range {}..={} must be non-empty and start above zero",
                self.wpm_range.start(),
                self.wpm_range.end()
            )));
        }
        if !self.wpm_range.contains(&self.wpm) {
            return Err(ReaderError::InvalidInput(format!(
                "wpm must be between {} and {}, got {}",
                self.wpm_range.start(),
                self.wpm_range.end(),
                self.wpm
            )));
        }
        if self.wpm_step == 0 {
            return Err(ReaderError::InvalidInput(
                "wpm step must be a positive integer".to_string(),
            ));
        }
        if self.end_of_sentence_delay_ms == Some(0) {
            return Err(ReaderError::InvalidInput(
                "end-of-sentence delay must be a positive number of milliseconds".to_string(),
            ));
        }
        Ok(())
    }
}

/// Window surface settings
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,

    /// Width in columns of each speed button, borders included
    pub button_width: u16,

    /// Columns between the two speed buttons
    pub button_gap: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Spot Reading".to_string(),
            button_width: 10,
            button_gap: 2,
        }
    }
}
