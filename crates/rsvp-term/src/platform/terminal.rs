use std::io::{self, Stdout};

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;

use crate::error::{TerminalError, TerminalResult};

/// Raw mode + alternate screen for as long as the value lives.
///
/// The terminal is restored on [`TerminalSession::restore`] or on drop,
/// whichever comes first.
pub struct TerminalSession {
    stdout: Stdout,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> TerminalResult<Self> {
        terminal::enable_raw_mode().map_err(|err| TerminalError::Terminal(err.to_string()))?;

        let mut session = Self {
            stdout: io::stdout(),
            active: true,
        };
        execute!(
            session.stdout,
            EnterAlternateScreen,
            EnableBracketedPaste,
            Hide,
            Clear(ClearType::All)
        )?;
        debug!("terminal: entered alternate screen");
        Ok(session)
    }

    pub fn size(&self) -> TerminalResult<(u16, u16)> {
        Ok(terminal::size()?)
    }

    pub fn writer(&mut self) -> &mut Stdout {
        &mut self.stdout
    }

    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        execute!(self.stdout, DisableBracketedPaste, Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
        debug!("terminal: restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
