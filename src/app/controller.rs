use super::event::AppEvent;
use super::mode::ReaderState;
use super::render_state::{wpm_label, RenderState};
use crate::engine::config::ReaderConfig;
use crate::engine::error::Result;
use crate::engine::timing::is_end_of_sentence;
use crate::reading::{Pacing, TokenSource};
use tracing::{debug, info};

/// Reader display controller.
///
/// Pulls one token per `advance`, keeps the WPM/delay pair and the two
/// visible strings (token and WPM label). Scheduling is left to the host
/// loop: `advance` returns the delay until the next call, and at most one
/// call is ever pending (`pending_delay`).
pub struct Controller {
    source: Box<dyn TokenSource>,
    pacing: Pacing,
    eos_delay_ms: Option<u64>,
    finished_marker: String,
    state: ReaderState,
    token: String,
    wpm_label: String,
    pending_delay: Option<u64>,
    tokens_shown: u64,
}

impl Controller {
    /// Validates `config` before taking the source; on error nothing is
    /// scheduled and the source is dropped untouched.
    pub fn new<S>(source: S, config: &ReaderConfig) -> Result<Self>
    where
        S: TokenSource + 'static,
    {
        let pacing = Pacing::new(config)?;
        let first_delay = pacing.text_delay_ms();

        info!(
            wpm = pacing.wpm(),
            step = pacing.step(),
            eos_delay_ms = ?config.end_of_sentence_delay_ms,
            "Reader controller created"
        );

        Ok(Self {
            source: Box::new(source),
            wpm_label: wpm_label(pacing.wpm()),
            pacing,
            eos_delay_ms: config.end_of_sentence_delay_ms,
            finished_marker: config.finished_marker.clone(),
            state: ReaderState::Running,
            token: String::new(),
            pending_delay: Some(first_delay),
            tokens_shown: 0,
        })
    }

    /// Shows the next token and returns the delay before the following
    /// advance, or `None` once the source is exhausted.
    pub fn advance(&mut self) -> Option<u64> {
        if self.state.is_finished() || self.pending_delay.is_none() {
            return None;
        }

        match self.source.next_token() {
            Some(token) => {
                let delay = self.delay_after(&token);
                self.token = token;
                self.tokens_shown += 1;
                self.pending_delay = Some(delay);
                debug!(token = %self.token, delay_ms = delay, "Advanced");
                Some(delay)
            }
            None => {
                self.token = self.finished_marker.clone();
                self.pending_delay = None;
                self.state = ReaderState::Finished;
                info!(tokens = self.tokens_shown, "Token source exhausted");
                None
            }
        }
    }

    fn delay_after(&self, token: &str) -> u64 {
        match self.eos_delay_ms {
            Some(eos) if is_end_of_sentence(token) => eos,
            _ => self.pacing.text_delay_ms(),
        }
    }

    pub fn increase_wpm(&mut self) {
        self.pacing.increase();
        self.refresh_wpm_label();
    }

    pub fn decrease_wpm(&mut self) {
        self.pacing.decrease();
        self.refresh_wpm_label();
    }

    pub fn set_wpm(&mut self, value: u32) {
        self.pacing.set_wpm(value);
        self.refresh_wpm_label();
    }

    fn refresh_wpm_label(&mut self) {
        self.wpm_label = wpm_label(self.pacing.wpm());
        debug!(
            wpm = self.pacing.wpm(),
            delay_ms = self.pacing.text_delay_ms(),
            "WPM changed"
        );
    }

    /// Applies a UI event. Returns false when the session should close.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::IncreaseWpm => self.increase_wpm(),
            AppEvent::DecreaseWpm => self.decrease_wpm(),
            AppEvent::Quit => {
                self.dispose();
                return false;
            }
            AppEvent::None => {}
        }
        true
    }

    /// Cancels the pending advance. Later `advance` calls do nothing.
    pub fn dispose(&mut self) {
        if self.pending_delay.take().is_some() {
            info!(tokens = self.tokens_shown, "Reading session closed");
        }
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn pending_delay(&self) -> Option<u64> {
        self.pending_delay
    }

    pub fn wpm(&self) -> u32 {
        self.pacing.wpm()
    }

    pub fn text_delay_ms(&self) -> u64 {
        self.pacing.text_delay_ms()
    }

    pub fn current_token(&self) -> &str {
        &self.token
    }

    pub fn wpm_label(&self) -> &str {
        &self.wpm_label
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            state: self.state,
            token: self.token.clone(),
            wpm: self.pacing.wpm(),
            wpm_label: self.wpm_label.clone(),
        }
    }
}
