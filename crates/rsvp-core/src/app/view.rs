impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    pub fn new(input: IN, config: ReaderConfig, app_title: &'static str) -> Self {
        Self::from_session(ReaderSession::new(config), input, app_title)
    }

    pub fn with_text(
        input: IN,
        config: ReaderConfig,
        app_title: &'static str,
        text: &str,
    ) -> Self {
        Self::from_session(ReaderSession::with_text(config, text), input, app_title)
    }

    fn from_session(session: ReaderSession, input: IN, app_title: &'static str) -> Self {
        Self {
            session,
            input,
            app_title,
            status: None,
            pending_redraw: true,
            quit_requested: false,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let advanced = self.tick_playback(now_ms);
        if advanced || self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let session = &self.session;
        let wpm = session.wpm();
        let style = session.style();

        if let Some(status) = self.status {
            f(Screen::Status {
                title: self.app_title,
                wpm,
                line1: status.line1,
                line2: status.line2,
                style,
            });
            return;
        }

        if session.total_words() == 0 {
            f(Screen::Idle {
                title: self.app_title,
                placeholder: PLACEHOLDER,
                wpm,
                style,
            });
            return;
        }

        f(Screen::Reading {
            title: self.app_title,
            wpm,
            word: session.current_parts(),
            pivot_enabled: session.pivot_enabled(),
            progress: session.metrics(),
            style,
        });
    }

    /// Replaces the reading text. Playback keeps running unless the text is
    /// now empty.
    pub fn set_text(&mut self, text: &str) {
        self.session.set_text(text);
        self.pending_redraw = true;
    }

    pub fn session(&self) -> &ReaderSession {
        &self.session
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}
