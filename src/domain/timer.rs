//! Focus-timer countdown state machine.
//!
//! The engine does not own a clock. The runtime arms a tick source while the
//! engine reports `Running` and feeds one `tick()` per elapsed second.
//!
//! ```text
//! Idle -> Running -> (Paused | Completed)
//! Paused -> Running
//! any --stop--> Idle
//! ```

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FOCUS_SECS: u32 = 25 * 60;
pub const DEFAULT_DAILY_TARGET: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

impl TimerStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "Ready to focus",
            TimerStatus::Running => "Focus time",
            TimerStatus::Paused => "Paused",
            TimerStatus::Completed => "Session complete",
        }
    }
}

/// Read-only snapshot of the current focus session.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSession {
    pub duration_secs: u32,
    pub remaining_secs: u32,
    pub status: TimerStatus,
    /// Sessions completed since the process started.
    pub session_index: u32,
    pub task_label: String,
}

impl TimerSession {
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        progress_fraction(self.duration_secs, self.remaining_secs)
    }

    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// 1-based number of the session on the clock. A finished session keeps
    /// its number until `stop` brings up the next one.
    #[must_use]
    pub fn number(&self) -> u32 {
        if self.status == TimerStatus::Completed {
            self.session_index.max(1)
        } else {
            self.session_index + 1
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimerEngine {
    session: TimerSession,
    count_skipped: bool,
    completions: Vec<DateTime<Local>>,
}

impl TimerEngine {
    /// Sessions last at least one second, so an idle session never starts
    /// at zero.
    #[must_use]
    pub fn new(duration_secs: u32, task_label: impl Into<String>) -> Self {
        let duration_secs = duration_secs.max(1);
        Self {
            session: TimerSession {
                duration_secs,
                remaining_secs: duration_secs,
                status: TimerStatus::Idle,
                session_index: 0,
                task_label: task_label.into(),
            },
            count_skipped: false,
            completions: Vec::new(),
        }
    }

    /// Whether `skip()` counts as a completed session.
    #[must_use]
    pub fn counting_skips(mut self, count_skipped: bool) -> Self {
        self.count_skipped = count_skipped;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> &TimerSession {
        &self.session
    }

    pub fn status(&self) -> TimerStatus {
        self.session.status
    }

    pub fn is_running(&self) -> bool {
        self.session.status == TimerStatus::Running
    }

    /// Number of counted completions that happened on `date` (local time).
    pub fn completed_on(&self, date: NaiveDate) -> usize {
        self.completions
            .iter()
            .filter(|at| at.date_naive() == date)
            .count()
    }

    pub fn completed_today(&self) -> usize {
        self.completed_on(Local::now().date_naive())
    }

    // ── Commands ─────────────────────────────────────────────────────
    //
    // Every command returns whether it changed the session. Invalid
    // transitions are no-ops.

    pub fn start(&mut self) -> bool {
        match self.session.status {
            TimerStatus::Idle | TimerStatus::Paused => {
                self.session.status = TimerStatus::Running;
                true
            }
            TimerStatus::Running | TimerStatus::Completed => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.session.status != TimerStatus::Running {
            return false;
        }
        self.session.status = TimerStatus::Paused;
        true
    }

    /// Start/pause button semantics.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn stop(&mut self) -> bool {
        let changed = self.session.status != TimerStatus::Idle
            || self.session.remaining_secs != self.session.duration_secs;
        self.session.status = TimerStatus::Idle;
        self.session.remaining_secs = self.session.duration_secs;
        changed
    }

    pub fn skip(&mut self) -> bool {
        if self.session.status == TimerStatus::Completed {
            return false;
        }
        self.complete(self.count_skipped);
        true
    }

    /// Applies one second of countdown. Ignored unless running.
    pub fn tick(&mut self) -> bool {
        if self.session.status != TimerStatus::Running {
            return false;
        }
        self.session.remaining_secs = self.session.remaining_secs.saturating_sub(1);
        if self.session.remaining_secs == 0 {
            self.complete(true);
        }
        true
    }

    /// Replaces the task label. Only allowed between sessions.
    pub fn assign_task(&mut self, label: impl Into<String>) -> bool {
        if self.session.status != TimerStatus::Idle {
            return false;
        }
        self.session.task_label = label.into();
        true
    }

    fn complete(&mut self, counted: bool) {
        self.session.remaining_secs = 0;
        self.session.status = TimerStatus::Completed;
        if counted {
            self.session.session_index += 1;
            self.completions.push(Local::now());
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_SECS, String::new())
    }
}

/// Elapsed share of the session, clamped to `[0, 1]`.
#[must_use]
pub fn progress_fraction(duration_secs: u32, remaining_secs: u32) -> f64 {
    if duration_secs == 0 {
        return 1.0;
    }
    let elapsed = duration_secs.saturating_sub(remaining_secs);
    (f64::from(elapsed) / f64::from(duration_secs)).clamp(0.0, 1.0)
}

/// `M:SS`, minutes unpadded.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::{Rng, SeedableRng};

    fn engine(duration: u32) -> TimerEngine {
        TimerEngine::new(duration, "Review Acme proposal")
    }

    #[test]
    fn starts_idle_with_full_duration() {
        let timer = engine(1500);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.session().remaining_secs, 1500);
        assert_eq!(timer.session().session_index, 0);
    }

    #[test]
    fn zero_duration_is_raised_to_one_second() {
        let mut timer = engine(0);
        assert_eq!(timer.session().duration_secs, 1);
        assert_eq!(timer.session().remaining_secs, 1);

        timer.start();
        assert_eq!(timer.status(), TimerStatus::Running);
        assert_ne!(timer.session().remaining_secs, 0);

        timer.tick();
        assert_eq!(timer.status(), TimerStatus::Completed);
        assert_eq!(timer.session().remaining_secs, 0);
    }

    #[test]
    fn session_number_follows_completions() {
        let mut timer = engine(2);
        assert_eq!(timer.session().number(), 1);

        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.session().number(), 1);

        timer.stop();
        assert_eq!(timer.session().number(), 2);
    }

    #[test]
    fn start_pause_resume() {
        let mut timer = engine(1500);
        assert!(timer.start());
        assert_eq!(timer.status(), TimerStatus::Running);
        assert!(!timer.start());

        assert!(timer.pause());
        assert_eq!(timer.status(), TimerStatus::Paused);
        assert!(!timer.pause());

        assert!(timer.start());
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn toggle_flips_between_running_and_paused() {
        let mut timer = engine(60);
        timer.toggle();
        assert_eq!(timer.status(), TimerStatus::Running);
        timer.toggle();
        assert_eq!(timer.status(), TimerStatus::Paused);
        timer.toggle();
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn tick_only_counts_down_while_running() {
        let mut timer = engine(10);
        assert!(!timer.tick());
        assert_eq!(timer.session().remaining_secs, 10);

        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.session().remaining_secs, 8);

        timer.pause();
        assert!(!timer.tick());
        assert_eq!(timer.session().remaining_secs, 8);
    }

    #[test]
    fn ticking_to_zero_completes_and_counts_session() {
        let mut timer = engine(3);
        timer.start();
        for _ in 0..3 {
            timer.tick();
        }
        assert_eq!(timer.status(), TimerStatus::Completed);
        assert_eq!(timer.session().remaining_secs, 0);
        assert_eq!(timer.session().session_index, 1);

        // Further ticks are suppressed.
        assert!(!timer.tick());
        assert_eq!(timer.session().remaining_secs, 0);
        assert_eq!(timer.session().session_index, 1);
    }

    #[test]
    fn completed_is_terminal_until_stop() {
        let mut timer = engine(1);
        timer.start();
        timer.tick();
        assert!(!timer.start());
        assert!(!timer.pause());
        assert!(!timer.skip());
        assert_eq!(timer.status(), TimerStatus::Completed);

        assert!(timer.stop());
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.session().remaining_secs, 1);
    }

    #[test]
    fn skip_completes_without_counting_by_default() {
        let mut timer = engine(1500);
        assert!(timer.skip());
        assert_eq!(timer.status(), TimerStatus::Completed);
        assert_eq!(timer.session().remaining_secs, 0);
        assert_eq!(timer.session().session_index, 0);
        assert_eq!(timer.completed_today(), 0);
    }

    #[test]
    fn skip_counts_when_configured() {
        let mut timer = engine(1500).counting_skips(true);
        timer.start();
        timer.skip();
        assert_eq!(timer.session().session_index, 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = engine(90);
        timer.start();
        timer.tick();
        assert!(timer.stop());
        let after_first = timer.session().clone();
        assert!(!timer.stop());
        assert_eq!(timer.session(), &after_first);
        assert_eq!(after_first.status, TimerStatus::Idle);
        assert_eq!(after_first.remaining_secs, 90);
    }

    #[test]
    fn task_label_is_fixed_within_a_session() {
        let mut timer = engine(60);
        assert!(timer.assign_task("Write quarterly report"));
        timer.start();
        assert!(!timer.assign_task("Something else"));
        timer.pause();
        assert!(!timer.assign_task("Something else"));
        assert_eq!(timer.session().task_label, "Write quarterly report");

        timer.stop();
        assert!(timer.assign_task("Next"));
        assert_eq!(timer.session().task_label, "Next");
    }

    #[test]
    fn completions_are_bucketed_by_local_date() {
        let mut timer = engine(60);
        let now = Local::now();
        timer.completions = vec![now - Duration::days(1), now, now];
        assert_eq!(timer.completed_on(now.date_naive()), 2);
        assert_eq!(
            timer.completed_on((now - Duration::days(1)).date_naive()),
            1
        );
        assert_eq!(
            timer.completed_on((now - Duration::days(2)).date_naive()),
            0
        );
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(1110), "18:30");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_fraction(1500, 1500), 0.0);
        assert_eq!(progress_fraction(1500, 0), 1.0);
        assert!((progress_fraction(1500, 750) - 0.5).abs() < f64::EPSILON);
        assert_eq!(progress_fraction(10, 20), 0.0);
        assert_eq!(progress_fraction(0, 0), 1.0);
    }

    #[test]
    fn random_operation_sequences_keep_invariants() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let duration = rng.gen_range(1..30);
            let mut timer = engine(duration);
            for _ in 0..300 {
                let before = timer.session().clone();
                match rng.gen_range(0..6) {
                    0 => {
                        timer.start();
                    }
                    1 => {
                        timer.pause();
                    }
                    2 => {
                        timer.stop();
                        assert_eq!(timer.status(), TimerStatus::Idle);
                        assert_eq!(timer.session().remaining_secs, duration);
                    }
                    3 => {
                        timer.skip();
                    }
                    _ => {
                        timer.tick();
                        if before.status != TimerStatus::Running {
                            assert_eq!(timer.session().remaining_secs, before.remaining_secs);
                        }
                    }
                }

                let s = timer.session();
                assert!(s.remaining_secs <= s.duration_secs);
                assert_eq!(s.remaining_secs == 0, s.status == TimerStatus::Completed);
                assert!(s.session_index >= before.session_index);
                let p = s.progress_fraction();
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
