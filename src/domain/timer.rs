use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pomodoro preset, each with a fixed countdown length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    /// Countdown length in seconds
    pub const fn duration(self) -> u32 {
        match self {
            Self::Focus => 25 * 60,
            Self::ShortBreak => 5 * 60,
            Self::LongBreak => 15 * 60,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus => write!(f, "Focus"),
            Self::ShortBreak => write!(f, "Short Break"),
            Self::LongBreak => write!(f, "Long Break"),
        }
    }
}

/// Where the current session of a mode stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Expired,
}

/// Formats seconds as a zero-padded `MM:SS` clock
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Countdown state machine for the pomodoro widget.
///
/// `remaining_seconds` always lies in `[0, mode.duration()]` and the timer
/// is never running with zero seconds left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroTimer {
    mode: Mode,
    remaining_seconds: u32,
    running: bool,
    completed_count: u32,
    expired: bool,
}

impl PomodoroTimer {
    pub fn new() -> Self {
        Self {
            mode: Mode::Focus,
            remaining_seconds: Mode::Focus.duration(),
            running: false,
            completed_count: 0,
            expired: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of focus sessions that counted down to zero
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.expired {
            TimerPhase::Expired
        } else {
            TimerPhase::Idle
        }
    }

    /// Stops the countdown and loads a fresh session of `mode`
    pub fn switch_mode(&mut self, mode: Mode) {
        info!("switching timer to {} mode", mode);
        self.mode = mode;
        self.remaining_seconds = mode.duration();
        self.running = false;
        self.expired = false;
    }

    /// Starts counting down. Does nothing once the countdown hit zero.
    pub fn start(&mut self) {
        if self.remaining_seconds == 0 {
            debug!("ignoring start on an expired {} session", self.mode);
            return;
        }
        if !self.running {
            info!(
                "timer started in {} mode with {}s left",
                self.mode, self.remaining_seconds
            );
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        if self.running {
            info!("timer paused at {}", self.display());
        }
        self.running = false;
    }

    /// Start when idle, pause when running
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stops the countdown and refills the current mode
    pub fn reset(&mut self) {
        debug!("timer reset in {} mode", self.mode);
        self.running = false;
        self.expired = false;
        self.remaining_seconds = self.mode.duration();
    }

    /// Advances the countdown by one second.
    ///
    /// The tick that would take the countdown below one second zeroes it,
    /// stops the timer and, in focus mode, counts a completed session.
    /// Ticks delivered while paused are ignored.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        if self.remaining_seconds <= 1 {
            self.remaining_seconds = 0;
            self.running = false;
            self.expired = true;
            if self.mode == Mode::Focus {
                self.completed_count += 1;
                info!(
                    "focus session complete ({} so far)",
                    self.completed_count
                );
            } else {
                info!("{} finished", self.mode);
            }
            return;
        }

        self.remaining_seconds -= 1;
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    /// Fraction of the current mode already elapsed, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        1.0 - f64::from(self.remaining_seconds) / f64::from(self.mode.duration())
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            running: self.running,
            completed_count: self.completed_count,
            phase: self.phase(),
            display: self.display(),
            progress: self.progress(),
        }
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the timer handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub remaining_seconds: u32,
    pub running: bool,
    pub completed_count: u32,
    pub phase: TimerPhase,
    pub display: String,
    pub progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(timer: &mut PomodoroTimer, count: u32) {
        for _ in 0..count {
            timer.tick();
        }
    }

    #[test]
    fn test_timer_creation() {
        let timer = PomodoroTimer::new();
        assert_eq!(timer.mode(), Mode::Focus);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_count(), 0);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_mode_durations() {
        assert_eq!(Mode::Focus.duration(), 1500);
        assert_eq!(Mode::ShortBreak.duration(), 300);
        assert_eq!(Mode::LongBreak.duration(), 900);
    }

    #[test]
    fn test_full_countdown_for_every_mode() {
        for mode in Mode::ALL {
            let mut timer = PomodoroTimer::new();
            timer.switch_mode(mode);
            timer.start();
            run_ticks(&mut timer, mode.duration());

            assert_eq!(timer.remaining_seconds(), 0, "{mode}");
            assert!(!timer.is_running(), "{mode}");
            assert_eq!(timer.phase(), TimerPhase::Expired);
        }
    }

    #[test]
    fn test_focus_completion_counts_once() {
        let mut timer = PomodoroTimer::new();
        timer.switch_mode(Mode::Focus);
        timer.start();
        run_ticks(&mut timer, 1500);
        assert_eq!(timer.completed_count(), 1);

        // Further ticks on an expired timer change nothing
        run_ticks(&mut timer, 10);
        assert_eq!(timer.completed_count(), 1);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_break_completion_does_not_count() {
        let mut timer = PomodoroTimer::new();
        timer.switch_mode(Mode::ShortBreak);
        timer.start();
        run_ticks(&mut timer, 300);
        assert_eq!(timer.completed_count(), 0);

        timer.switch_mode(Mode::LongBreak);
        timer.start();
        run_ticks(&mut timer, 900);
        assert_eq!(timer.completed_count(), 0);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut timer = PomodoroTimer::new();
        timer.start();
        run_ticks(&mut timer, 3);

        timer.pause();
        let once = timer.clone();
        timer.pause();
        assert_eq!(timer, once);
    }

    #[test]
    fn test_ticks_while_paused_are_ignored() {
        let mut timer = PomodoroTimer::new();
        run_ticks(&mut timer, 5);
        assert_eq!(timer.remaining_seconds(), 1500);

        timer.start();
        run_ticks(&mut timer, 5);
        timer.pause();
        run_ticks(&mut timer, 5);
        assert_eq!(timer.remaining_seconds(), 1495);
    }

    #[test]
    fn test_start_after_expiry_is_noop() {
        let mut timer = PomodoroTimer::new();
        timer.switch_mode(Mode::ShortBreak);
        timer.start();
        run_ticks(&mut timer, 300);

        timer.start();
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), TimerPhase::Expired);
    }

    #[test]
    fn test_reset_refills_current_mode() {
        let mut timer = PomodoroTimer::new();
        timer.switch_mode(Mode::LongBreak);
        timer.start();
        run_ticks(&mut timer, 42);

        timer.reset();
        assert_eq!(timer.mode(), Mode::LongBreak);
        assert_eq!(timer.remaining_seconds(), 900);
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_switch_mode_stops_and_refills() {
        let mut timer = PomodoroTimer::new();
        timer.start();
        run_ticks(&mut timer, 10);

        timer.switch_mode(Mode::ShortBreak);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_toggle() {
        let mut timer = PomodoroTimer::new();
        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_progress() {
        let mut timer = PomodoroTimer::new();
        assert_eq!(timer.progress(), 0.0);

        timer.switch_mode(Mode::ShortBreak);
        timer.start();
        run_ticks(&mut timer, 150);
        assert!((timer.progress() - 0.5).abs() < f64::EPSILON);

        run_ticks(&mut timer, 150);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut timer = PomodoroTimer::new();
        timer.switch_mode(Mode::ShortBreak);

        let json = serde_json::to_value(timer.snapshot()).unwrap();
        assert_eq!(json["mode"], "short_break");
        assert_eq!(json["display"], "05:00");
        assert_eq!(json["phase"], "idle");
        assert_eq!(json["remaining_seconds"], 300);
    }
}
