use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use rsvp_core::input::{InputEvent, InputProvider};

use crate::error::TerminalError;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardConfig {
    direction_inverted: bool,
}

impl KeyboardConfig {
    /// Swaps the rate up/down keys.
    pub const fn with_direction_inverted(mut self, direction_inverted: bool) -> Self {
        self.direction_inverted = direction_inverted;
        self
    }
}

/// Non-blocking crossterm keyboard reader.
///
/// Besides key presses it keeps the last resize and any bracketed paste so the
/// host loop can pick them up after each tick.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    config: KeyboardConfig,
    resized: Option<(u16, u16)>,
    pasted: Option<String>,
}

impl KeyboardInput {
    pub fn new(config: KeyboardConfig) -> Self {
        Self {
            config,
            resized: None,
            pasted: None,
        }
    }

    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resized.take()
    }

    pub fn take_paste(&mut self) -> Option<String> {
        self.pasted.take()
    }

    fn observe(&mut self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => map_key(&self.config, key),
            Event::Resize(width, height) => {
                self.resized = Some((width, height));
                None
            }
            Event::Paste(text) => {
                debug!("keyboard: paste of {} bytes", text.len());
                self.pasted = Some(text);
                None
            }
            _ => None,
        }
    }
}

impl InputProvider for KeyboardInput {
    type Error = TerminalError;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            if let Some(input) = self.observe(event::read()?) {
                return Ok(Some(input));
            }
        }

        Ok(None)
    }
}

pub fn map_key(config: &KeyboardConfig, key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let (faster, slower) = if config.direction_inverted {
        (InputEvent::RateDown, InputEvent::RateUp)
    } else {
        (InputEvent::RateUp, InputEvent::RateDown)
    };

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputEvent::TogglePlayback),
        KeyCode::Up | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Some(faster),
        KeyCode::Down | KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => Some(slower),
        KeyCode::Char(']') => Some(InputEvent::FontSizeUp),
        KeyCode::Char('[') => Some(InputEvent::FontSizeDown),
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'r' => Some(InputEvent::Reset),
            'p' => Some(InputEvent::TogglePivot),
            'f' => Some(InputEvent::NextFont),
            'c' => Some(InputEvent::NextColor),
            'q' => Some(InputEvent::Quit),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_playback_and_settings_keys() {
        let config = KeyboardConfig::default();
        assert_eq!(map_key(&config, press(KeyCode::Char(' '))), Some(InputEvent::TogglePlayback));
        assert_eq!(map_key(&config, press(KeyCode::Enter)), Some(InputEvent::TogglePlayback));
        assert_eq!(map_key(&config, press(KeyCode::Char('R'))), Some(InputEvent::Reset));
        assert_eq!(map_key(&config, press(KeyCode::Char('p'))), Some(InputEvent::TogglePivot));
        assert_eq!(map_key(&config, press(KeyCode::Char('f'))), Some(InputEvent::NextFont));
        assert_eq!(map_key(&config, press(KeyCode::Char('c'))), Some(InputEvent::NextColor));
        assert_eq!(map_key(&config, press(KeyCode::Char(']'))), Some(InputEvent::FontSizeUp));
        assert_eq!(map_key(&config, press(KeyCode::Char('['))), Some(InputEvent::FontSizeDown));
        assert_eq!(map_key(&config, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        let config = KeyboardConfig::default();
        assert_eq!(map_key(&config, press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(&config, press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(
            map_key(&config, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn rate_keys_follow_direction() {
        let config = KeyboardConfig::default();
        assert_eq!(map_key(&config, press(KeyCode::Up)), Some(InputEvent::RateUp));
        assert_eq!(map_key(&config, press(KeyCode::Char('-'))), Some(InputEvent::RateDown));

        let inverted = KeyboardConfig::default().with_direction_inverted(true);
        assert_eq!(map_key(&inverted, press(KeyCode::Up)), Some(InputEvent::RateDown));
        assert_eq!(map_key(&inverted, press(KeyCode::Down)), Some(InputEvent::RateUp));
    }

    #[test]
    fn ignores_key_release() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(&KeyboardConfig::default(), release), None);
    }

    #[test]
    fn keeps_resize_and_paste_for_host() {
        let mut input = KeyboardInput::new(KeyboardConfig::default());
        assert_eq!(input.observe(Event::Resize(120, 40)), None);
        assert_eq!(input.observe(Event::Paste("new text".into())), None);

        assert_eq!(input.take_resize(), Some((120, 40)));
        assert_eq!(input.take_resize(), None);
        assert_eq!(input.take_paste().as_deref(), Some("new text"));
        assert_eq!(
            input.observe(Event::Key(press(KeyCode::Char(' ')))),
            Some(InputEvent::TogglePlayback)
        );
    }
}
