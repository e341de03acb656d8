//! Session state owning the source text, rate and render parameters.
//!
//! This is the in-process API a presentation layer drives: replace the text,
//! change the rate, toggle the pivot, start/pause/reset, and observe the
//! current word with its derived counters.

use alloc::{string::String, vec::Vec};
use core::ops::Range;

use log::debug;

use crate::{
    pivot::{WordParts, split_word},
    playback::{
        PlaybackController, PlaybackState, ProgressMetrics, Status, TickOutcome, interval_ms,
    },
    render::{FontColor, FontFamily, FontSize, VisualStyle},
    tokenizer::token_spans,
};

pub const DEFAULT_TEXT: &str =
    "Paste your text here to start a rapid serial visual presentation session.";

pub const DEFAULT_WPM: u16 = 320;
pub const MIN_WPM: u16 = 100;
pub const MAX_WPM: u16 = 900;
pub const WPM_STEP: u16 = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
    pub pivot_enabled: bool,
    pub style: VisualStyle,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            min_wpm: MIN_WPM,
            max_wpm: MAX_WPM,
            wpm_step: WPM_STEP,
            pivot_enabled: true,
            style: VisualStyle::default(),
        }
    }
}

impl ReaderConfig {
    /// Orders the bounds and pulls `wpm` inside them.
    pub fn normalized(mut self) -> Self {
        if self.max_wpm < self.min_wpm {
            core::mem::swap(&mut self.max_wpm, &mut self.min_wpm);
        }
        self.min_wpm = self.min_wpm.max(1);
        self.max_wpm = self.max_wpm.max(self.min_wpm);
        self.wpm_step = self.wpm_step.max(1);
        self.wpm = self.wpm.clamp(self.min_wpm, self.max_wpm);
        self
    }
}

#[derive(Debug)]
pub struct ReaderSession {
    text: String,
    spans: Vec<Range<usize>>,
    config: ReaderConfig,
    playback: PlaybackController,
}

impl ReaderSession {
    pub fn new(config: ReaderConfig) -> Self {
        Self::with_text(config, DEFAULT_TEXT)
    }

    pub fn with_text(config: ReaderConfig, text: &str) -> Self {
        let text = String::from(text);
        let spans = token_spans(&text);

        Self {
            text,
            spans,
            config: config.normalized(),
            playback: PlaybackController::new(),
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the source text wholesale and re-tokenizes it.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.spans = token_spans(&self.text);
        self.playback.retarget(self.spans.len());
        debug!("session: text replaced, words={}", self.spans.len());
    }

    pub fn wpm(&self) -> u16 {
        self.config.wpm
    }

    pub fn interval_ms(&self) -> u32 {
        interval_ms(self.config.wpm)
    }

    /// Applies a new rate, clamped to the configured bounds.
    ///
    /// A running schedule restarts from `now_ms` at the new period. Returns the
    /// rate actually applied.
    pub fn set_rate(&mut self, wpm: u16, now_ms: u64) -> u16 {
        let wpm = wpm.clamp(self.config.min_wpm, self.config.max_wpm);
        if wpm != self.config.wpm {
            self.config.wpm = wpm;
            debug!("session: rate={} interval_ms={}", wpm, self.interval_ms());
            self.playback.restart_schedule(self.interval_ms(), now_ms);
        }
        wpm
    }

    /// Moves the rate by one step. Returns `false` when already at a bound.
    pub fn step_rate(&mut self, increase: bool, now_ms: u64) -> bool {
        let current = self.config.wpm;
        let next = if increase {
            current.saturating_add(self.config.wpm_step)
        } else {
            current.saturating_sub(self.config.wpm_step)
        };

        self.set_rate(next, now_ms) != current
    }

    pub fn pivot_enabled(&self) -> bool {
        self.config.pivot_enabled
    }

    pub fn set_pivot_enabled(&mut self, enabled: bool) {
        self.config.pivot_enabled = enabled;
    }

    pub fn style(&self) -> VisualStyle {
        self.config.style
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.config.style.font_family = family;
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.config.style.font_size = size;
    }

    pub fn set_font_color(&mut self, color: FontColor) {
        self.config.style.font_color = color;
    }

    pub fn start(&mut self, now_ms: u64) -> bool {
        self.playback
            .start(self.spans.len(), self.interval_ms(), now_ms)
    }

    pub fn pause(&mut self) -> bool {
        self.playback.pause()
    }

    /// Pauses when playing, starts otherwise. Returns whether playback is
    /// running afterwards.
    pub fn toggle_playback(&mut self, now_ms: u64) -> bool {
        if self.playback.is_running() {
            self.pause();
            false
        } else {
            self.start(now_ms)
        }
    }

    pub fn reset(&mut self) {
        self.playback.reset();
    }

    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        self.playback.tick(self.spans.len(), now_ms)
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_running()
    }

    pub fn cursor(&self) -> usize {
        self.playback.cursor()
    }

    pub fn total_words(&self) -> usize {
        self.spans.len()
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.text[span.clone()])
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|span| &self.text[span.clone()])
    }

    pub fn current_word(&self) -> Option<&str> {
        self.word_at(self.playback.cursor())
    }

    /// Current word split for rendering; empty parts when there is no word.
    pub fn current_parts(&self) -> WordParts<'_> {
        match self.current_word() {
            Some(word) => split_word(word, self.config.pivot_enabled),
            None => WordParts::default(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state(self.spans.len())
    }

    pub fn status(&self) -> Status {
        self.playback.status(self.spans.len())
    }

    pub fn metrics(&self) -> ProgressMetrics {
        self.playback.metrics(self.spans.len())
    }
}
