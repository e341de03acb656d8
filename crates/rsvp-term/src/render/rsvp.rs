use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use rsvp_core::{
    pivot::WordParts,
    playback::ProgressMetrics,
    render::{Screen, VisualStyle},
    text_policy::{font_size_label, word_counter_label, words_per_second_label, wpm_label},
};
use unicode_width::UnicodeWidthStr;

use super::FrameRenderer;
use crate::error::TerminalResult;

const HELP: &str =
    "space start/pause  r reset  up/down rate  p pivot  f font  c color  [ ] size  q quit";
const PIVOT_COLOR: Color = Color::Red;
const FIXATION_MARK: &str = "|";
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

pub struct TerminalRenderer {
    width: u16,
    height: u16,
    orp_anchor_percent: u16,
}

impl TerminalRenderer {
    pub fn new(width: u16, height: u16, orp_anchor_percent: u16) -> Self {
        Self {
            width,
            height,
            orp_anchor_percent: orp_anchor_percent.min(100),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn word_row(&self) -> u16 {
        self.height / 2
    }

    fn draw_header<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        wpm: u16,
        style: VisualStyle,
        pivot_enabled: Option<bool>,
    ) -> TerminalResult<()> {
        let width = self.width as usize;
        let rate = wpm_label(wpm);
        let per_second = words_per_second_label(wpm);
        let mut right = String::with_capacity(32);
        right.push_str(&rate);
        right.push_str("  ");
        right.push_str(&per_second);

        queue!(
            out,
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(fit(title, width.saturating_sub(right.width() + 1))),
            SetAttribute(Attribute::Reset)
        )?;
        queue!(
            out,
            MoveTo(right_aligned_column(self.width, right.width()), 0),
            Print(&right)
        )?;

        let size = font_size_label(style.font_size.px());
        let mut settings = format!(
            "{}  {}  {}",
            style.font_family.label(),
            size.as_str(),
            style.font_color.label()
        );
        match pivot_enabled {
            Some(true) => settings.push_str("  pivot on"),
            Some(false) => settings.push_str("  pivot off"),
            None => {}
        }
        queue!(
            out,
            MoveTo(0, 1),
            SetForegroundColor(Color::DarkGrey),
            Print(fit(&settings, width)),
            ResetColor
        )?;
        Ok(())
    }

    fn draw_word<W: Write>(
        &self,
        out: &mut W,
        word: WordParts<'_>,
        pivot_enabled: bool,
        color: Color,
    ) -> TerminalResult<()> {
        let row = self.word_row();
        let lead_cols = word.lead.width();

        if !(pivot_enabled && word.has_pivot()) {
            let cols = lead_cols + word.pivot.width() + word.tail.width();
            queue!(
                out,
                MoveTo(centered_column(self.width, cols), row),
                SetForegroundColor(color),
                Print(word.lead),
                Print(word.pivot),
                Print(word.tail),
                ResetColor
            )?;
            return Ok(());
        }

        let pivot_cols = word.pivot.width().max(1);
        let start = word_start_column(self.width, self.orp_anchor_percent, lead_cols, pivot_cols);
        let mark = start.saturating_add(lead_cols as u16);

        queue!(
            out,
            MoveTo(start, row),
            SetForegroundColor(color),
            Print(word.lead),
            SetForegroundColor(PIVOT_COLOR),
            SetAttribute(Attribute::Bold),
            Print(word.pivot),
            SetAttribute(Attribute::NormalIntensity),
            SetForegroundColor(color),
            Print(word.tail),
            ResetColor
        )?;

        // Fixation guides above and below the pivot letter.
        queue!(out, SetForegroundColor(Color::DarkGrey))?;
        if row > 2 {
            queue!(out, MoveTo(mark, row - 1), Print(FIXATION_MARK))?;
        }
        if row + 1 < self.height.saturating_sub(3) {
            queue!(out, MoveTo(mark, row + 1), Print(FIXATION_MARK))?;
        }
        queue!(out, ResetColor)?;
        Ok(())
    }

    fn draw_progress<W: Write>(
        &self,
        out: &mut W,
        progress: ProgressMetrics,
    ) -> TerminalResult<()> {
        let counter_row = self.height.saturating_sub(3);
        let bar_row = self.height.saturating_sub(2);
        let counter = word_counter_label(progress.word_number, progress.total_words);
        let status = progress.status.label();

        queue!(
            out,
            MoveTo(0, counter_row),
            Print(counter.as_str()),
            MoveTo(right_aligned_column(self.width, status.width()), counter_row),
            SetAttribute(Attribute::Bold),
            Print(status),
            SetAttribute(Attribute::Reset),
            MoveTo(0, bar_row),
            Print(progress_bar(progress.progress_percent, self.width as usize))
        )?;
        Ok(())
    }

    fn draw_centered<W: Write>(
        &self,
        out: &mut W,
        row: u16,
        text: &str,
        color: Color,
    ) -> TerminalResult<()> {
        let text = fit(text, self.width as usize);
        queue!(
            out,
            MoveTo(centered_column(self.width, text.width()), row),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )?;
        Ok(())
    }

    fn draw_help<W: Write>(&self, out: &mut W) -> TerminalResult<()> {
        queue!(
            out,
            MoveTo(0, self.height.saturating_sub(1)),
            SetForegroundColor(Color::DarkGrey),
            Print(fit(HELP, self.width as usize)),
            ResetColor
        )?;
        Ok(())
    }
}

impl FrameRenderer for TerminalRenderer {
    fn render<W: Write>(&mut self, screen: Screen<'_>, out: &mut W) -> TerminalResult<()> {
        queue!(out, Clear(ClearType::All))?;

        match screen {
            Screen::Idle {
                title,
                placeholder,
                wpm,
                style,
            } => {
                self.draw_header(out, title, wpm, style, None)?;
                self.draw_centered(out, self.word_row(), placeholder, Color::DarkGrey)?;
            }
            Screen::Reading {
                title,
                wpm,
                word,
                pivot_enabled,
                progress,
                style,
            } => {
                self.draw_header(out, title, wpm, style, Some(pivot_enabled))?;
                self.draw_word(out, word, pivot_enabled, font_color(style))?;
                self.draw_progress(out, progress)?;
            }
            Screen::Status {
                title,
                wpm,
                line1,
                line2,
                style,
            } => {
                self.draw_header(out, title, wpm, style, None)?;
                let row = self.word_row();
                self.draw_centered(out, row, line1, Color::Yellow)?;
                self.draw_centered(out, row.saturating_add(1), line2, font_color(style))?;
            }
        }

        self.draw_help(out)?;
        out.flush()?;
        Ok(())
    }
}

fn font_color(style: VisualStyle) -> Color {
    let (r, g, b) = style.font_color.rgb();
    Color::Rgb { r, g, b }
}

/// Column where a word must begin so its pivot glyph is centred on the anchor.
pub fn word_start_column(
    width: u16,
    anchor_percent: u16,
    lead_cols: usize,
    pivot_cols: usize,
) -> u16 {
    let anchor = (width as usize * anchor_percent.min(100) as usize) / 100;
    let pivot_left = anchor.saturating_sub(pivot_cols / 2);
    pivot_left.saturating_sub(lead_cols) as u16
}

pub fn centered_column(width: u16, cols: usize) -> u16 {
    ((width as usize).saturating_sub(cols) / 2) as u16
}

fn right_aligned_column(width: u16, cols: usize) -> u16 {
    (width as usize).saturating_sub(cols) as u16
}

pub fn progress_bar(percent: f32, cols: usize) -> String {
    let ratio = percent.clamp(0.0, 100.0) / 100.0;
    let filled = ((ratio * cols as f32).round() as usize).min(cols);

    let mut bar = String::with_capacity(cols * BAR_FULL.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_FULL, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, cols - filled));
    bar
}

/// Longest prefix of `text` that fits in `max_cols` terminal columns.
pub fn fit(text: &str, max_cols: usize) -> &str {
    let mut cols = 0usize;
    for (idx, ch) in text.char_indices() {
        let ch_cols = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if cols + ch_cols > max_cols {
            return &text[..idx];
        }
        cols += ch_cols;
    }
    text
}
