//! Terminal front end for the RSVP engine: keyboard input, scoped terminal
//! session and a renderer for `rsvp_core::render::Screen`.

pub mod error;
pub mod input;
pub mod platform;
pub mod render;
