//! Render parameters and the view model consumed by presentation layers.

use crate::{pivot::WordParts, playback::ProgressMetrics};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FontFamily {
    #[default]
    Inter,
    SystemUi,
    Arial,
    Verdana,
    Georgia,
    TimesNewRoman,
    Garamond,
    CourierNew,
    FiraCode,
    SackersGothic,
}

impl FontFamily {
    pub const ALL: [Self; 10] = [
        Self::Inter,
        Self::SystemUi,
        Self::Arial,
        Self::Verdana,
        Self::Georgia,
        Self::TimesNewRoman,
        Self::Garamond,
        Self::CourierNew,
        Self::FiraCode,
        Self::SackersGothic,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::SystemUi => "System UI",
            Self::Arial => "Arial",
            Self::Verdana => "Verdana",
            Self::Georgia => "Georgia",
            Self::TimesNewRoman => "Times New Roman",
            Self::Garamond => "Garamond",
            Self::CourierNew => "Courier New",
            Self::FiraCode => "Fira Code",
            Self::SackersGothic => "Sackers Gothic",
        }
    }

    /// CSS `font-family` stack for hosts that render through a browser engine.
    pub const fn font_stack(self) -> &'static str {
        match self {
            Self::Inter => "Inter, system-ui, -apple-system, Segoe UI, sans-serif",
            Self::SystemUi => "system-ui, -apple-system, Segoe UI, sans-serif",
            Self::Arial => "Arial, Helvetica, sans-serif",
            Self::Verdana => "Verdana, Geneva, sans-serif",
            Self::Georgia => "Georgia, serif",
            Self::TimesNewRoman => "\"Times New Roman\", Times, serif",
            Self::Garamond => "Garamond, serif",
            Self::CourierNew => "\"Courier New\", Courier, monospace",
            Self::FiraCode => "\"Fira Code\", ui-monospace, SFMono-Regular, Menlo, monospace",
            Self::SackersGothic => "'SackersGothic', sans-serif",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.label().eq_ignore_ascii_case(label))
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FontColor {
    #[default]
    White,
    Shade2,
    Shade3,
    Shade4,
    Shade5,
    Shade6,
    Shade7,
    LightGray,
}

impl FontColor {
    pub const ALL: [Self; 8] = [
        Self::White,
        Self::Shade2,
        Self::Shade3,
        Self::Shade4,
        Self::Shade5,
        Self::Shade6,
        Self::Shade7,
        Self::LightGray,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Shade2 => "Shade 2",
            Self::Shade3 => "Shade 3",
            Self::Shade4 => "Shade 4",
            Self::Shade5 => "Shade 5",
            Self::Shade6 => "Shade 6",
            Self::Shade7 => "Shade 7",
            Self::LightGray => "Light gray",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::White => (0xff, 0xff, 0xff),
            Self::Shade2 => (0xf2, 0xf2, 0xf2),
            Self::Shade3 => (0xe5, 0xe5, 0xe5),
            Self::Shade4 => (0xd8, 0xd8, 0xd8),
            Self::Shade5 => (0xca, 0xca, 0xca),
            Self::Shade6 => (0xbd, 0xbd, 0xbd),
            Self::Shade7 => (0xb0, 0xb0, 0xb0),
            Self::LightGray => (0xa3, 0xa3, 0xa3),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(label))
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Font size in pixels, kept inside `MIN..=MAX`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct FontSize(u16);

impl FontSize {
    pub const MIN_PX: u16 = 28;
    pub const MAX_PX: u16 = 120;
    pub const STEP_PX: u16 = 20;
    pub const DEFAULT_PX: u16 = 64;

    pub fn new(px: u16) -> Self {
        Self(px.clamp(Self::MIN_PX, Self::MAX_PX))
    }

    pub const fn px(self) -> u16 {
        self.0
    }

    pub fn larger(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP_PX))
    }

    pub fn smaller(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP_PX))
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(Self::DEFAULT_PX)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VisualStyle {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: FontColor,
}

/// App-level view model consumed by the terminal renderer.
pub enum Screen<'a> {
    Idle {
        title: &'a str,
        placeholder: &'a str,
        wpm: u16,
        style: VisualStyle,
    },
    Reading {
        title: &'a str,
        wpm: u16,
        word: WordParts<'a>,
        pivot_enabled: bool,
        progress: ProgressMetrics,
        style: VisualStyle,
    },
    Status {
        title: &'a str,
        wpm: u16,
        line1: &'a str,
        line2: &'a str,
        style: VisualStyle,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_is_clamped_and_stepped() {
        assert_eq!(FontSize::default().px(), 64);
        assert_eq!(FontSize::new(4).px(), FontSize::MIN_PX);
        assert_eq!(FontSize::new(500).px(), FontSize::MAX_PX);
        assert_eq!(FontSize::new(64).larger().px(), 84);
        assert_eq!(FontSize::new(110).larger().px(), 120);
        assert_eq!(FontSize::new(40).smaller().px(), 28);
    }

    #[test]
    fn option_lists_wrap_around() {
        assert_eq!(FontFamily::SackersGothic.next(), FontFamily::Inter);
        assert_eq!(FontFamily::Inter.next(), FontFamily::SystemUi);
        assert_eq!(FontColor::LightGray.next(), FontColor::White);
    }

    #[test]
    fn options_resolve_from_labels() {
        assert_eq!(FontFamily::from_label("fira code"), Some(FontFamily::FiraCode));
        assert_eq!(FontFamily::from_label("Comic Sans"), None);
        assert_eq!(FontColor::from_label("Light gray"), Some(FontColor::LightGray));
        assert_eq!(FontColor::Shade4.rgb(), (0xd8, 0xd8, 0xd8));
    }
}
