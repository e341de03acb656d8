impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    /// Advances playback. Returns whether the visible word or status changed.
    fn tick_playback(&mut self, now_ms: u64) -> bool {
        match self.session.tick(now_ms) {
            TickOutcome::Advanced | TickOutcome::Finished => true,
            TickOutcome::Waiting | TickOutcome::Stopped => false,
        }
    }

    fn set_status(&mut self, line1: &'static str, line2: &'static str) {
        warn!("app: {} / {}", line1, line2);
        self.session.pause();
        self.status = Some(StatusLines { line1, line2 });
        self.pending_redraw = true;
    }
}
