use crate::domain::timer::{Mode, PomodoroTimer, TimerSnapshot};
use crate::error::{DeckError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// How often the countdown advances while running
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub period_ms: u64,
}

impl TickerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.period_ms == 0 {
            return Err(DeckError::ConfigError(
                "ticker period must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self { period_ms: 1000 }
    }
}

struct Session {
    timer: PomodoroTimer,
    /// Bumped whenever a tick loop is started or interrupted
    epoch: u64,
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives a [`PomodoroTimer`] from a Tokio interval.
///
/// At most one tick loop exists per driver. Pausing, resetting or switching
/// mode invalidates the loop under the timer lock before returning, so a
/// tick scheduled for an earlier session is never applied to the new one.
pub struct TimerDriver {
    session: Arc<Mutex<Session>>,
    period: Duration,
    tick_loop: Option<JoinHandle<()>>,
}

impl TimerDriver {
    pub fn new(config: &TickerConfig) -> Self {
        Self::with_timer(PomodoroTimer::new(), config)
    }

    pub fn with_timer(timer: PomodoroTimer, config: &TickerConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session { timer, epoch: 0 })),
            period: config.period().max(Duration::from_millis(1)),
            tick_loop: None,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        lock(&self.session).timer.snapshot()
    }

    /// Whether a tick loop is currently live
    pub fn is_scheduled(&self) -> bool {
        self.tick_loop
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Starts the countdown and schedules ticks.
    ///
    /// Must be called from within a Tokio runtime. Starting an expired timer
    /// or one whose ticks are already scheduled does nothing; a timer handed
    /// over while running gets its tick loop here.
    pub fn start(&mut self) -> Result<()> {
        let runtime = Handle::try_current().map_err(|_| DeckError::NoRuntime)?;

        let epoch = {
            let mut session = lock(&self.session);
            if session.timer.is_running() && self.is_scheduled() {
                return Ok(());
            }
            session.timer.start();
            if !session.timer.is_running() {
                return Ok(());
            }
            session.epoch += 1;
            session.epoch
        };

        self.cancel();
        let tick_loop = run_tick_loop(Arc::clone(&self.session), epoch, self.period);
        self.tick_loop = Some(runtime.spawn(tick_loop));
        debug!("tick loop {} scheduled every {:?}", epoch, self.period);
        Ok(())
    }

    pub fn pause(&mut self) {
        self.interrupt(PomodoroTimer::pause);
    }

    pub fn reset(&mut self) {
        self.interrupt(PomodoroTimer::reset);
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.interrupt(|timer| timer.switch_mode(mode));
    }

    /// Start when idle, pause when running
    pub fn toggle(&mut self) -> Result<()> {
        if self.snapshot().running {
            self.pause();
            Ok(())
        } else {
            self.start()
        }
    }

    fn interrupt(&mut self, apply: impl FnOnce(&mut PomodoroTimer)) {
        {
            let mut session = lock(&self.session);
            session.epoch += 1;
            apply(&mut session.timer);
        }
        self.cancel();
    }

    /// Aborts the tick loop; a no-op when none is scheduled
    fn cancel(&mut self) {
        if let Some(handle) = self.tick_loop.take() {
            handle.abort();
            debug!("tick loop cancelled");
        }
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_tick_loop(session: Arc<Mutex<Session>>, epoch: u64, period: Duration) {
    let mut ticks = interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;

        let mut state = lock(&session);
        if state.epoch != epoch || !state.timer.is_running() {
            debug!("tick loop {} is stale, exiting", epoch);
            break;
        }

        state.timer.tick();
        if !state.timer.is_running() {
            debug!("tick loop {} finished with the countdown", epoch);
            break;
        }
    }
}
