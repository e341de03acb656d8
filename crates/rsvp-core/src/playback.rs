//! Playback timing and the cursor state machine.
//!
//! The controller owns the cursor and the running schedule. Word count and
//! rate are owned by the session and passed in on every call.

use log::debug;

/// Floor applied to the tick period regardless of rate.
pub const MIN_INTERVAL_MS: u32 = 20;

/// Milliseconds between words at `wpm`, rounded half up, never below
/// [`MIN_INTERVAL_MS`].
pub const fn interval_ms(wpm: u16) -> u32 {
    let wpm = if wpm == 0 { 1 } else { wpm as u32 };
    let rounded = (60_000 + wpm / 2) / wpm;
    if rounded < MIN_INTERVAL_MS {
        MIN_INTERVAL_MS
    } else {
        rounded
    }
}

/// Periodic deadline held by a running controller.
///
/// There is no background timer behind it: the host polls it with the current
/// time, and dropping the value is what cancels it.
#[derive(Debug, Eq, PartialEq)]
pub struct TickSchedule {
    period_ms: u32,
    next_due_ms: u64,
}

impl TickSchedule {
    pub fn start(period_ms: u32, now_ms: u64) -> Self {
        let period_ms = period_ms.max(MIN_INTERVAL_MS);
        Self {
            period_ms,
            next_due_ms: now_ms.saturating_add(period_ms as u64),
        }
    }

    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub const fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Returns `true` once per elapsed period.
    ///
    /// A caller that falls more than a full period behind gets a single tick and
    /// a deadline re-based on `now_ms`, never a burst.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }

        let period = self.period_ms as u64;
        self.next_due_ms = self.next_due_ms.saturating_add(period);
        if self.next_due_ms <= now_ms {
            self.next_due_ms = now_ms.saturating_add(period);
        }
        true
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
enum Transport {
    #[default]
    Stopped,
    Running(TickSchedule),
}

/// Full playback state, including the freshly reset position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Idle,
    StoppedAtStart,
    Playing,
    Paused,
    Completed,
}

impl PlaybackState {
    pub const fn status(self) -> Status {
        match self {
            Self::Idle => Status::Idle,
            Self::Playing => Status::Playing,
            Self::Completed => Status::Completed,
            Self::StoppedAtStart | Self::Paused => Status::Paused,
        }
    }
}

/// Status shown next to the word counter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Idle,
    Playing,
    Paused,
    Completed,
}

impl Status {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

/// Derived counters for one observation of the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressMetrics {
    pub word_number: usize,
    pub total_words: usize,
    /// 0.0..=100.0
    pub progress_percent: f32,
    pub status: Status,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// No schedule is running.
    Stopped,
    /// Running, but the next deadline has not been reached.
    Waiting,
    Advanced,
    /// The last word had its full tick; the schedule was released.
    Finished,
}

pub const fn word_number(cursor: usize, total_words: usize) -> usize {
    if total_words == 0 {
        return 0;
    }

    let number = cursor.saturating_add(1);
    if number < total_words {
        number
    } else {
        total_words
    }
}

pub fn progress_percent(cursor: usize, total_words: usize) -> f32 {
    if total_words == 0 {
        return 0.0;
    }

    let pct = word_number(cursor, total_words) as f32 / total_words as f32 * 100.0;
    pct.min(100.0)
}

pub const fn status(cursor: usize, total_words: usize, running: bool) -> Status {
    if total_words == 0 {
        Status::Idle
    } else if running {
        Status::Playing
    } else if cursor >= total_words - 1 {
        Status::Completed
    } else {
        Status::Paused
    }
}

#[derive(Debug, Default)]
pub struct PlaybackController {
    cursor: usize,
    transport: Transport,
}

impl PlaybackController {
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            transport: Transport::Stopped,
        }
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.transport, Transport::Running(_))
    }

    pub const fn schedule(&self) -> Option<&TickSchedule> {
        match &self.transport {
            Transport::Running(schedule) => Some(schedule),
            Transport::Stopped => None,
        }
    }

    /// Enters `Playing`. Rewinds first when the cursor sits on the last word.
    ///
    /// Returns `false` without touching anything when there are no words or a
    /// schedule is already running.
    pub fn start(&mut self, total_words: usize, interval_ms: u32, now_ms: u64) -> bool {
        if total_words == 0 {
            debug!("playback: start ignored, no words");
            return false;
        }
        if self.is_running() {
            return false;
        }

        if self.cursor >= total_words - 1 {
            self.cursor = 0;
        }

        let schedule = TickSchedule::start(interval_ms, now_ms);
        debug!(
            "playback: start cursor={} total={} period_ms={}",
            self.cursor,
            total_words,
            schedule.period_ms()
        );
        self.transport = Transport::Running(schedule);
        true
    }

    /// Stops the schedule and keeps the cursor. Returns whether it was running.
    pub fn pause(&mut self) -> bool {
        let was_running = self.cancel();
        if was_running {
            debug!("playback: pause cursor={}", self.cursor);
        }
        was_running
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.cursor = 0;
        debug!("playback: reset");
    }

    /// Replaces a running schedule with a fresh one at the new period.
    ///
    /// Elapsed time in the interrupted period is discarded.
    pub fn restart_schedule(&mut self, interval_ms: u32, now_ms: u64) -> bool {
        if !self.is_running() {
            return false;
        }

        let schedule = TickSchedule::start(interval_ms, now_ms);
        debug!("playback: restart period_ms={}", schedule.period_ms());
        self.transport = Transport::Running(schedule);
        true
    }

    /// Re-validates the cursor against a new word count.
    pub fn retarget(&mut self, total_words: usize) {
        if total_words == 0 && self.cancel() {
            debug!("playback: stopped, text is empty");
        }
        if self.cursor >= total_words && self.cursor != 0 {
            debug!(
                "playback: cursor {} out of range for {} words, rewinding",
                self.cursor, total_words
            );
            self.cursor = 0;
        }
    }

    pub fn tick(&mut self, total_words: usize, now_ms: u64) -> TickOutcome {
        let Transport::Running(schedule) = &mut self.transport else {
            return TickOutcome::Stopped;
        };

        if total_words == 0 {
            self.cancel();
            return TickOutcome::Stopped;
        }
        if !schedule.poll(now_ms) {
            return TickOutcome::Waiting;
        }

        let next = self.cursor + 1;
        if next >= total_words {
            self.transport = Transport::Stopped;
            debug!("playback: reached last word {}", self.cursor);
            return TickOutcome::Finished;
        }

        self.cursor = next;
        TickOutcome::Advanced
    }

    /// Drops the running schedule, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) -> bool {
        matches!(
            core::mem::take(&mut self.transport),
            Transport::Running(_)
        )
    }

    pub fn state(&self, total_words: usize) -> PlaybackState {
        if total_words == 0 {
            PlaybackState::Idle
        } else if self.is_running() {
            PlaybackState::Playing
        } else if self.cursor >= total_words - 1 {
            PlaybackState::Completed
        } else if self.cursor == 0 {
            PlaybackState::StoppedAtStart
        } else {
            PlaybackState::Paused
        }
    }

    pub fn status(&self, total_words: usize) -> Status {
        status(self.cursor, total_words, self.is_running())
    }

    pub fn metrics(&self, total_words: usize) -> ProgressMetrics {
        ProgressMetrics {
            word_number: word_number(self.cursor, total_words),
            total_words,
            progress_percent: progress_percent(self.cursor, total_words),
            status: self.status(total_words),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: u32 = 188;

    fn run_to_end(controller: &mut PlaybackController, total: usize, start_ms: u64) -> u64 {
        let mut now = start_ms;
        for _ in 0..(total * 2 + 4) {
            now += PERIOD as u64;
            if controller.tick(total, now) == TickOutcome::Finished {
                break;
            }
        }
        now
    }

    #[test]
    fn interval_rounds_and_floors() {
        assert_eq!(interval_ms(320), 188);
        assert_eq!(interval_ms(100), 600);
        assert_eq!(interval_ms(900), 67);
        assert_eq!(interval_ms(280), 214);
        assert_eq!(interval_ms(3_000), MIN_INTERVAL_MS);
        assert_eq!(interval_ms(u16::MAX), MIN_INTERVAL_MS);
        assert_eq!(interval_ms(0), 60_000);
    }

    #[test]
    fn schedule_fires_once_per_period() {
        let mut schedule = TickSchedule::start(100, 1_000);
        assert!(!schedule.poll(1_099));
        assert!(schedule.poll(1_100));
        assert!(!schedule.poll(1_150));
        assert!(schedule.poll(1_205));
        assert_eq!(schedule.next_due_ms(), 1_300);
    }

    #[test]
    fn late_poll_rebases_instead_of_bursting() {
        let mut schedule = TickSchedule::start(100, 0);
        assert!(schedule.poll(550));
        assert_eq!(schedule.next_due_ms(), 650);
        assert!(!schedule.poll(600));
    }

    #[test]
    fn schedule_period_has_floor() {
        assert_eq!(TickSchedule::start(1, 0).period_ms(), MIN_INTERVAL_MS);
    }

    #[test]
    fn plays_to_last_word_without_overrun() {
        for total in 1..=6 {
            let mut controller = PlaybackController::new();
            assert!(controller.start(total, PERIOD, 0));
            run_to_end(&mut controller, total, 0);

            assert_eq!(controller.cursor(), total - 1);
            assert!(!controller.is_running());
            assert_eq!(controller.status(total), Status::Completed);
            assert_eq!(controller.tick(total, u64::MAX), TickOutcome::Stopped);
            assert_eq!(controller.cursor(), total - 1);
        }
    }

    #[test]
    fn last_word_is_shown_for_a_full_tick() {
        let mut controller = PlaybackController::new();
        controller.start(2, PERIOD, 0);

        assert_eq!(controller.tick(2, 188), TickOutcome::Advanced);
        assert_eq!(controller.cursor(), 1);
        assert_eq!(controller.status(2), Status::Playing);
        assert_eq!(controller.tick(2, 300), TickOutcome::Waiting);
        assert_eq!(controller.tick(2, 376), TickOutcome::Finished);
        assert_eq!(controller.cursor(), 1);
    }

    #[test]
    fn start_without_words_is_noop() {
        let mut controller = PlaybackController::new();
        assert!(!controller.start(0, PERIOD, 0));
        assert!(controller.schedule().is_none());
        assert_eq!(controller.state(0), PlaybackState::Idle);
        assert_eq!(controller.status(0), Status::Idle);
    }

    #[test]
    fn reset_right_after_start_leaves_nothing_pending() {
        let mut controller = PlaybackController::new();
        controller.start(4, PERIOD, 0);
        controller.reset();

        assert_eq!(controller.cursor(), 0);
        assert_eq!(controller.state(4), PlaybackState::StoppedAtStart);
        assert_ne!(controller.status(4), Status::Playing);
        assert_ne!(controller.status(4), Status::Completed);
        for step in 1..20u64 {
            assert_eq!(controller.tick(4, step * 188), TickOutcome::Stopped);
        }
        assert_eq!(controller.cursor(), 0);
    }

    #[test]
    fn start_after_completion_rewinds() {
        let mut controller = PlaybackController::new();
        controller.start(3, PERIOD, 0);
        let end = run_to_end(&mut controller, 3, 0);
        assert_eq!(controller.status(3), Status::Completed);

        assert!(controller.start(3, PERIOD, end));
        assert_eq!(controller.cursor(), 0);
        assert_eq!(controller.status(3), Status::Playing);
    }

    #[test]
    fn start_while_running_keeps_schedule() {
        let mut controller = PlaybackController::new();
        controller.start(5, PERIOD, 0);
        assert!(!controller.start(5, 50, 100));
        assert_eq!(controller.schedule().map(TickSchedule::period_ms), Some(PERIOD));
    }

    #[test]
    fn pause_keeps_cursor_and_resume_continues() {
        let mut controller = PlaybackController::new();
        controller.start(5, PERIOD, 0);
        controller.tick(5, 188);
        controller.tick(5, 376);
        assert!(controller.pause());
        assert!(!controller.pause());

        assert_eq!(controller.cursor(), 2);
        assert_eq!(controller.state(5), PlaybackState::Paused);
        assert_eq!(controller.tick(5, 10_000), TickOutcome::Stopped);

        assert!(controller.start(5, PERIOD, 10_000));
        assert_eq!(controller.cursor(), 2);
        assert_eq!(controller.tick(5, 10_188), TickOutcome::Advanced);
        assert_eq!(controller.cursor(), 3);
    }

    #[test]
    fn rate_change_restarts_period_from_now() {
        let mut controller = PlaybackController::new();
        controller.start(10, 600, 0);
        assert!(controller.restart_schedule(100, 550));
        assert_eq!(controller.tick(10, 600), TickOutcome::Waiting);
        assert_eq!(controller.tick(10, 650), TickOutcome::Advanced);

        controller.pause();
        assert!(!controller.restart_schedule(100, 700));
        assert!(controller.schedule().is_none());
    }

    #[test]
    fn shrinking_word_count_rewinds_cursor() {
        let mut controller = PlaybackController::new();
        controller.start(6, PERIOD, 0);
        for step in 1..=4u64 {
            controller.tick(6, step * 188);
        }
        assert_eq!(controller.cursor(), 4);

        controller.retarget(5);
        assert_eq!(controller.cursor(), 4);
        controller.retarget(4);
        assert_eq!(controller.cursor(), 0);
        assert!(controller.is_running());
    }

    #[test]
    fn emptied_text_stops_playback() {
        let mut controller = PlaybackController::new();
        controller.start(3, PERIOD, 0);
        controller.retarget(0);

        assert!(!controller.is_running());
        assert_eq!(controller.state(0), PlaybackState::Idle);
        assert_eq!(controller.status(0), Status::Idle);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut controller = PlaybackController::new();
        assert!(!controller.cancel());
        controller.start(2, PERIOD, 0);
        assert!(controller.cancel());
        assert!(!controller.cancel());
    }

    #[test]
    fn derived_counters() {
        assert_eq!(word_number(0, 0), 0);
        assert_eq!(word_number(0, 4), 1);
        assert_eq!(word_number(3, 4), 4);
        assert_eq!(word_number(9, 4), 4);
        assert_eq!(progress_percent(0, 4), 25.0);
        assert_eq!(progress_percent(3, 4), 100.0);
        assert_eq!(progress_percent(0, 0), 0.0);

        assert_eq!(status(0, 0, true), Status::Idle);
        assert_eq!(status(1, 4, true), Status::Playing);
        assert_eq!(status(3, 4, false), Status::Completed);
        assert_eq!(status(0, 1, false), Status::Completed);
        assert_eq!(status(1, 4, false), Status::Paused);
    }

    #[test]
    fn progress_stays_within_bounds() {
        for total in 0..40 {
            for cursor in 0..45 {
                let pct = progress_percent(cursor, total);
                assert!((0.0..=100.0).contains(&pct), "cursor={cursor} total={total}");
            }
        }
    }

    #[test]
    fn metrics_follow_controller() {
        let mut controller = PlaybackController::new();
        controller.start(4, PERIOD, 0);
        controller.tick(4, 188);

        let metrics = controller.metrics(4);
        assert_eq!(metrics.word_number, 2);
        assert_eq!(metrics.total_words, 4);
        assert_eq!(metrics.progress_percent, 50.0);
        assert_eq!(metrics.status, Status::Playing);
        assert_eq!(PlaybackState::StoppedAtStart.status(), Status::Paused);
    }
}
