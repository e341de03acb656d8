impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    self.set_status("INPUT ERROR", "CHECK PROVIDER");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        if self.status.take().is_some() {
            self.pending_redraw = true;
            if !matches!(event, InputEvent::Quit) {
                return;
            }
        }

        let session = &mut self.session;
        let changed = match event {
            InputEvent::TogglePlayback => {
                let was_playing = session.is_playing();
                session.toggle_playback(now_ms) != was_playing
            }
            InputEvent::Reset => {
                if session.total_words() == 0 {
                    false
                } else {
                    session.reset();
                    true
                }
            }
            InputEvent::RateUp => session.step_rate(true, now_ms),
            InputEvent::RateDown => session.step_rate(false, now_ms),
            InputEvent::TogglePivot => {
                session.set_pivot_enabled(!session.pivot_enabled());
                true
            }
            InputEvent::NextFont => {
                session.set_font_family(session.style().font_family.next());
                true
            }
            InputEvent::NextColor => {
                session.set_font_color(session.style().font_color.next());
                true
            }
            InputEvent::FontSizeUp => {
                let size = session.style().font_size;
                session.set_font_size(size.larger());
                size != session.style().font_size
            }
            InputEvent::FontSizeDown => {
                let size = session.style().font_size;
                session.set_font_size(size.smaller());
                size != session.style().font_size
            }
            InputEvent::Quit => {
                session.pause();
                self.quit_requested = true;
                true
            }
        };

        if changed {
            debug!("app: applied {:?}", event);
            self.pending_redraw = true;
        }
    }
}
