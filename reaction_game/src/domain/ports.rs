use std::time::Duration;

/// Identifies one scheduled timer. Tokens are never reused by the timer that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

// Port for reading a monotonic clock.
pub trait Clock {
    /// Offset from an arbitrary, fixed origin. Only meaningful for deltas.
    fn now(&self) -> Duration;
}

// Port for one-shot delayed callbacks.
//
// Firing is reported back to the controller as `timer_fired(token)` by whoever
// drives the event loop; the timer itself never touches game state.
pub trait Timer {
    fn schedule(&mut self, delay: Duration) -> TimerToken;
    fn cancel(&mut self, token: TimerToken);
}

// Port for drawing the waiting delay before the screen turns green.
pub trait DelaySource {
    fn next_delay(&mut self) -> Duration;
}
