use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::{Clock, DelaySource, Timer, TimerToken};

// Manually advanced time source for deterministic controller tests.
#[derive(Clone, Default)]
pub(crate) struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().expect("clock mutex poisoned");
        *guard += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().expect("clock mutex poisoned")
    }
}

#[derive(Default)]
struct TimerLog {
    next_token: u64,
    scheduled: Vec<(TimerToken, Duration)>,
    cancelled: Vec<TimerToken>,
}

// Timer that never fires on its own; tests deliver `timer_fired` by hand.
#[derive(Clone, Default)]
pub(crate) struct RecordingTimer {
    log: Arc<Mutex<TimerLog>>,
}

impl RecordingTimer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn scheduled_delays(&self) -> Vec<Duration> {
        let guard = self.log.lock().expect("timer mutex poisoned");
        guard.scheduled.iter().map(|(_, delay)| *delay).collect()
    }

    pub(crate) fn cancelled(&self) -> Vec<TimerToken> {
        let guard = self.log.lock().expect("timer mutex poisoned");
        guard.cancelled.clone()
    }
}

impl Timer for RecordingTimer {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let mut guard = self.log.lock().expect("timer mutex poisoned");
        guard.next_token += 1;
        let token = TimerToken(guard.next_token);
        guard.scheduled.push((token, delay));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        let mut guard = self.log.lock().expect("timer mutex poisoned");
        guard.cancelled.push(token);
    }
}

// Delay source that always returns the same delay.
pub(crate) struct FixedDelay(pub(crate) Duration);

impl FixedDelay {
    pub(crate) fn millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl DelaySource for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}
