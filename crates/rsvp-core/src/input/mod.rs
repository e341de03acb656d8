//! Input abstraction layer.

mod scripted;

pub use scripted::ScriptedInput;

/// Logical actions consumed by the reader app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Start when stopped, pause when playing.
    TogglePlayback,
    Reset,
    RateUp,
    RateDown,
    TogglePivot,
    NextFont,
    NextColor,
    FontSizeUp,
    FontSizeDown,
    Quit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
