use std::io;

use thiserror::Error;

pub type TerminalResult<T> = std::result::Result<T, TerminalError>;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal error: {0}")]
    Terminal(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
