//! Tick-driven reader application: input in, playback advanced, screen out.

use log::{debug, warn};

use crate::{
    input::{InputEvent, InputProvider},
    playback::TickOutcome,
    render::Screen,
    session::{ReaderConfig, ReaderSession},
    text_policy::PLACEHOLDER,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct StatusLines {
    line1: &'static str,
    line2: &'static str,
}

pub struct ReaderApp<IN>
where
    IN: InputProvider,
{
    session: ReaderSession,
    input: IN,
    app_title: &'static str,
    status: Option<StatusLines>,
    pending_redraw: bool,
    quit_requested: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
