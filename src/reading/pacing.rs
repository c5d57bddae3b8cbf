use crate::engine::config::ReaderConfig;
use crate::engine::error::Result;
use crate::engine::timing::wpm_to_milliseconds;
use std::ops::RangeInclusive;

/// WPM together with the delay derived from it. The two fields only change
/// through `set_wpm`, so the delay never lags behind the WPM.
#[derive(Debug, Clone, PartialEq)]
pub struct Pacing {
    wpm: u32,
    text_delay_ms: u64,
    step: u32,
    range: RangeInclusive<u32>,
}

impl Pacing {
    pub fn new(config: &ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            wpm: config.wpm,
            text_delay_ms: wpm_to_milliseconds(config.wpm),
            step: config.wpm_step,
            range: config.wpm_range.clone(),
        })
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn text_delay_ms(&self) -> u64 {
        self.text_delay_ms
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Sets WPM, clamped to the configured range, and recomputes the delay.
    pub fn set_wpm(&mut self, value: u32) {
        let wpm = value.clamp(*self.range.start(), *self.range.end());
        self.wpm = wpm;
        self.text_delay_ms = wpm_to_milliseconds(wpm);
    }

    pub fn increase(&mut self) {
        self.set_wpm(self.wpm.saturating_add(self.step));
    }

    pub fn decrease(&mut self) {
        self.set_wpm(self.wpm.saturating_sub(self.step));
    }
}
