pub mod rsvp;

use std::io::Write;

use rsvp_core::render::Screen;

use crate::error::TerminalResult;

pub trait FrameRenderer {
    fn render<W: Write>(&mut self, screen: Screen<'_>, out: &mut W) -> TerminalResult<()>;
}
