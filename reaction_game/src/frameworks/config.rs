use crate::domain::DelayRange;
use crate::domain::leaderboard::LEADERBOARD_CAPACITY;
use crate::domain::tuning::{DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS};
use std::{env, path::PathBuf, time::Duration};

// Runtime constants and env-driven settings (not gameplay rules).

pub const EVENT_CHANNEL_CAPACITY: usize = 64;

pub fn delay_range() -> DelayRange {
    let min_ms = env_u64("REACTION_MIN_DELAY_MS").unwrap_or(DEFAULT_MIN_DELAY_MS);
    let max_ms = env_u64("REACTION_MAX_DELAY_MS").unwrap_or(DEFAULT_MAX_DELAY_MS);
    DelayRange::new(min_ms, max_ms).unwrap_or_else(|error| {
        tracing::warn!(%error, "falling back to default delay range");
        DelayRange::default()
    })
}

pub fn rng_seed() -> Option<u64> {
    env_u64("REACTION_SEED")
}

pub fn leaderboard_capacity() -> usize {
    env::var("LEADERBOARD_CAPACITY")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|capacity| *capacity > 0)
        .unwrap_or(LEADERBOARD_CAPACITY)
}

// The terminal belongs to the UI, so logs go to a file.
pub fn log_file() -> PathBuf {
    env::var("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("reaction_game.log"))
}

pub fn json_logs() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}

// Upper bound on how long a finished game loop may take to wind down.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
