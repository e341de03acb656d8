#![cfg_attr(not(test), no_std)]

//! Presentation engine for a one-word-at-a-time (RSVP) reader.
//!
//! Time never advances on its own here: every operation that depends on the
//! clock takes an explicit `now_ms`, and a host loop drives [`app::ReaderApp::tick`].

extern crate alloc;

pub mod app;
pub mod input;
pub mod pivot;
pub mod playback;
pub mod render;
pub mod session;
pub mod text_policy;
pub mod tokenizer;
