// Game controller: owns the phase, the pending timer, and the leaderboard.

use super::types::GameSnapshot;
use crate::domain::{
    Clock, DelaySource, GameError, GameState, Leaderboard, LeaderboardEntry, Phase, Session,
    Timer, TimerToken,
};
use std::time::Duration;
use tracing::{debug, info};

/// Reaction game state machine with injected clock, timer, and delay source.
///
/// All transitions happen through `&mut self` methods, so the owner (normally
/// [`game_task`](super::game_task)) serializes them. At most one timer is ever
/// pending; it is cancelled on restart, on [`shutdown`](Self::shutdown), and on drop.
pub struct GameController<C, T, D>
where
    C: Clock,
    T: Timer,
    D: DelaySource,
{
    clock: C,
    timer: T,
    delays: D,
    state: GameState,
    username: Option<String>,
    leaderboard: Leaderboard,
    leaderboard_visible: bool,
}

impl<C, T, D> GameController<C, T, D>
where
    C: Clock,
    T: Timer,
    D: DelaySource,
{
    pub fn new(clock: C, timer: T, delays: D, leaderboard: Leaderboard) -> Self {
        Self {
            clock,
            timer,
            delays,
            state: GameState::Start,
            username: None,
            leaderboard,
            leaderboard_visible: false,
        }
    }

    /// Stores the trimmed username. Blank input leaves the current name untouched.
    pub fn confirm_username(&mut self, raw: &str) -> Result<(), GameError> {
        let username = raw.trim();
        if username.is_empty() {
            return Err(GameError::EmptyUsername);
        }

        info!(username, "username confirmed");
        self.username = Some(username.to_string());
        Ok(())
    }

    /// Begins a new round from any phase, superseding a pending timer.
    pub fn start(&mut self) {
        self.cancel_pending();
        self.leaderboard_visible = false;

        let delay = self.delays.next_delay();
        let timer = self.timer.schedule(delay);
        self.state = GameState::Waiting { timer };
        info!(
            delay_ms = delay.as_millis() as u64,
            timer = timer.0,
            "round started"
        );
    }

    /// Moves Waiting to Ready when `token` is the timer this round scheduled.
    pub fn timer_fired(&mut self, token: TimerToken) {
        match self.state {
            GameState::Waiting { timer } if timer == token => {
                let started_at = self.clock.now();
                self.state = GameState::Ready { started_at };
                debug!(timer = token.0, "ready");
            }
            _ => debug!(timer = token.0, phase = ?self.phase(), "stale timer ignored"),
        }
    }

    /// Scores the tap when Ready; anything else is ignored.
    pub fn tap(&mut self) -> Option<Duration> {
        let GameState::Ready { started_at } = self.state else {
            debug!(phase = ?self.phase(), "tap ignored");
            return None;
        };

        let reaction_time = self.clock.now().saturating_sub(started_at);
        self.state = GameState::Result {
            started_at,
            reaction_time,
        };
        info!(
            reaction_ms = reaction_time.as_secs_f64() * 1000.0,
            "round finished"
        );

        self.record(reaction_time);
        Some(reaction_time)
    }

    /// Returns to Start from Result.
    pub fn play_again(&mut self) {
        if self.state.phase() == Phase::Result {
            self.state = GameState::Start;
        }
    }

    pub fn show_leaderboard(&mut self) {
        self.leaderboard_visible = true;
    }

    pub fn hide_leaderboard(&mut self) {
        self.leaderboard_visible = false;
    }

    /// Cancels any pending timer. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.cancel_pending();
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> Session {
        self.state.session()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn leaderboard_visible(&self) -> bool {
        self.leaderboard_visible
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase(),
            username: self.username.clone(),
            reaction_time: self.session().reaction_time,
            leaderboard_visible: self.leaderboard_visible,
            leaderboard: self.leaderboard.entries().to_vec(),
            leaderboard_capacity: self.leaderboard.capacity(),
        }
    }

    fn record(&mut self, reaction_time: Duration) {
        let Some(username) = self.username.as_deref() else {
            debug!("no username; result not recorded");
            return;
        };

        match LeaderboardEntry::new(username, reaction_time) {
            Ok(entry) => {
                let rank = self.leaderboard.submit(entry);
                info!(?rank, size = self.leaderboard.len(), "leaderboard updated");
            }
            Err(error) => debug!(%error, "result not recorded"),
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.state.pending_timer() {
            self.timer.cancel(token);
            self.state = GameState::Start;
            debug!(timer = token.0, "pending timer cancelled");
        }
    }
}

impl<C, T, D> Drop for GameController<C, T, D>
where
    C: Clock,
    T: Timer,
    D: DelaySource,
{
    fn drop(&mut self) {
        if let Some(token) = self.state.pending_timer() {
            self.timer.cancel(token);
        }
    }
}
