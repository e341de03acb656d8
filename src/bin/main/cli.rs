//! Command-line options for the terminal reader.

use clap::{ArgAction, Parser};
use rsvp_core::{
    render::{FontColor, FontFamily, FontSize, VisualStyle},
    session::{DEFAULT_TEXT, DEFAULT_WPM, ReaderConfig},
};

/// rsvp-reader - read text one word at a time in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "rsvp-reader",
    version,
    about = "rsvp-reader - read text one word at a time in the terminal"
)]
pub struct Cli {
    /// Text to read; paste into the window to replace it while running
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Words per minute (100-900, clamped)
    #[arg(short = 'w', long = "wpm", default_value_t = DEFAULT_WPM)]
    pub wpm: u16,

    /// Font family label, e.g. "Fira Code"
    #[arg(long = "font", default_value = "Inter", value_parser = parse_font_family)]
    pub font: FontFamily,

    /// Font size in px (28-120, clamped)
    #[arg(long = "font-size", default_value_t = FontSize::DEFAULT_PX)]
    pub font_size: u16,

    /// Font color label, e.g. "Shade 3"
    #[arg(long = "color", default_value = "White", value_parser = parse_font_color)]
    pub color: FontColor,

    /// Show words without the highlighted pivot letter
    #[arg(long = "no-pivot")]
    pub no_pivot: bool,

    /// Swap the rate up/down keys
    #[arg(long = "invert-rate-keys")]
    pub invert_rate_keys: bool,

    /// Increase verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or(DEFAULT_TEXT)
    }

    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            wpm: self.wpm,
            pivot_enabled: !self.no_pivot,
            style: VisualStyle {
                font_family: self.font,
                font_size: FontSize::new(self.font_size),
                font_color: self.color,
            },
            ..ReaderConfig::default()
        }
        .normalized()
    }
}

fn parse_font_family(s: &str) -> Result<FontFamily, String> {
    FontFamily::from_label(s).ok_or_else(|| {
        let known: Vec<&str> = FontFamily::ALL.iter().map(|f| f.label()).collect();
        format!("unknown font '{}', expected one of: {}", s, known.join(", "))
    })
}

fn parse_font_color(s: &str) -> Result<FontColor, String> {
    FontColor::from_label(s).ok_or_else(|| {
        let known: Vec<&str> = FontColor::ALL.iter().map(|c| c.label()).collect();
        format!("unknown color '{}', expected one of: {}", s, known.join(", "))
    })
}
