// Game phases and the per-round timing data each one carries.

use crate::domain::ports::TimerToken;
use std::time::Duration;

/// Current phase of the state machine, with exactly the data that phase needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Start,
    Waiting {
        timer: TimerToken,
    },
    Ready {
        started_at: Duration,
    },
    Result {
        started_at: Duration,
        reaction_time: Duration,
    },
}

/// Data-free view of `GameState` for presentation and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Start,
    Waiting,
    Ready,
    Result,
}

/// Timing record of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub started_at: Option<Duration>,
    pub reaction_time: Option<Duration>,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        match self {
            GameState::Start => Phase::Start,
            GameState::Waiting { .. } => Phase::Waiting,
            GameState::Ready { .. } => Phase::Ready,
            GameState::Result { .. } => Phase::Result,
        }
    }

    pub fn session(&self) -> Session {
        match *self {
            GameState::Start | GameState::Waiting { .. } => Session::default(),
            GameState::Ready { started_at } => Session {
                started_at: Some(started_at),
                reaction_time: None,
            },
            GameState::Result {
                started_at,
                reaction_time,
            } => Session {
                started_at: Some(started_at),
                reaction_time: Some(reaction_time),
            },
        }
    }

    /// Token of the timer this state is waiting on, if any.
    pub fn pending_timer(&self) -> Option<TimerToken> {
        match self {
            GameState::Waiting { timer } => Some(*timer),
            _ => None,
        }
    }
}
