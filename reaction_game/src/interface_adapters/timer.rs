// Tokio-backed one-shot timer that reports firing as a game event.

use crate::domain::{Timer, TimerToken};
use crate::use_cases::GameEvent;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

/// Spawns one sleeping task per scheduled delay.
///
/// When the sleep completes the task sends `GameEvent::TimerFired` into the game
/// loop's channel. Cancelling aborts the task; a firing that was already queued is
/// filtered out by the controller's token check.
///
/// Only a weak sender is held, so the timer never keeps the game loop's channel open
/// once every other sender is gone.
pub struct TokioTimer {
    event_tx: mpsc::WeakSender<GameEvent>,
    next_token: u64,
    pending: HashMap<TimerToken, AbortHandle>,
}

impl TokioTimer {
    pub fn new(event_tx: &mpsc::Sender<GameEvent>) -> Self {
        Self {
            event_tx: event_tx.downgrade(),
            next_token: 0,
            pending: HashMap::new(),
        }
    }

    /// Number of timers scheduled and not yet finished or cancelled.
    pub fn pending(&self) -> usize {
        self.pending
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl Timer for TokioTimer {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        // Forget timers that already fired.
        self.pending.retain(|_, handle| !handle.is_finished());

        self.next_token = self.next_token.wrapping_add(1);
        let token = TimerToken(self.next_token);
        let event_tx = self.event_tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let delivered = match event_tx.upgrade() {
                Some(event_tx) => event_tx.send(GameEvent::TimerFired { token }).await.is_ok(),
                None => false,
            };
            if !delivered {
                debug!(timer = token.0, "game loop gone; timer dropped");
            }
        });
        self.pending.insert(token, handle.abort_handle());
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.pending.remove(&token) {
            handle.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn when_delay_elapses_then_event_is_delivered() {
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let mut timer = TokioTimer::new(&event_tx);

        let token = timer.schedule(Duration::from_millis(750));
        assert_eq!(timer.pending(), 1);

        let event = event_rx.recv().await.expect("timer should fire");
        assert_eq!(event, GameEvent::TimerFired { token });
    }

    #[tokio::test(start_paused = true)]
    async fn when_cancelled_then_nothing_is_delivered() {
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let mut timer = TokioTimer::new(&event_tx);

        let cancelled = timer.schedule(Duration::from_millis(100));
        let kept = timer.schedule(Duration::from_millis(300));
        assert_ne!(cancelled, kept);
        timer.cancel(cancelled);

        let event = event_rx.recv().await.expect("kept timer should fire");
        assert_eq!(event, GameEvent::TimerFired { token: kept });

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn when_dropped_then_pending_timers_never_fire() {
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let mut timer = TokioTimer::new(&event_tx);
        timer.schedule(Duration::from_millis(100));
        drop(timer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(event_rx.try_recv().is_err());
        drop(event_tx);
    }

    #[tokio::test(start_paused = true)]
    async fn when_only_the_timer_remains_then_channel_closes() {
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let mut timer = TokioTimer::new(&event_tx);
        timer.schedule(Duration::from_millis(100));
        drop(event_tx);

        assert_eq!(event_rx.recv().await, None);

        // The sleeping task wakes, finds no game loop, and exits quietly.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(timer.pending(), 0);
    }
}
