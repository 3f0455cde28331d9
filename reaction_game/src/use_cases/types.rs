// Use-case level inputs/outputs for the game loop.

use crate::domain::{LeaderboardEntry, Phase, TimerToken};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ConfirmUsername(String),
    Start,
    Tap,
    PlayAgain,
    ShowLeaderboard,
    HideLeaderboard,
    TimerFired { token: TimerToken },
    Shutdown,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub username: Option<String>,
    pub reaction_time: Option<Duration>,
    pub leaderboard_visible: bool,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub leaderboard_capacity: usize,
}
