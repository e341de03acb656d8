//! Fixed-capacity labels for compact status surfaces.

use core::fmt::Write;

use heapless::String;

pub const PLACEHOLDER: &str = "Paste text to begin.";

/// "Word 3 of 10".
pub fn word_counter_label(word_number: usize, total_words: usize) -> String<56> {
    let mut out = String::new();
    let _ = write!(out, "Word {} of {}", word_number, total_words);
    out
}

/// "320 WPM".
pub fn wpm_label(wpm: u16) -> String<12> {
    let mut out = String::new();
    let _ = write!(out, "{} WPM", wpm);
    out
}

/// Rate in words per second with one decimal, rounded half up: "5.3 words/s".
pub fn words_per_second_label(wpm: u16) -> String<20> {
    let tenths = (wpm as u32 * 10 + 30) / 60;
    let mut out = String::new();
    let _ = write!(out, "{}.{} words/s", tenths / 10, tenths % 10);
    out
}

/// "64px".
pub fn font_size_label(px: u16) -> String<8> {
    let mut out = String::new();
    let _ = write!(out, "{}px", px);
    out
}
