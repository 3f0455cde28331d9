// Tuning for the waiting delay before the screen turns green.

use crate::domain::errors::GameError;
use rand::Rng;
use std::time::Duration;

pub const DEFAULT_MIN_DELAY_MS: u64 = 300;
pub const DEFAULT_MAX_DELAY_MS: u64 = 10_000;

/// Closed-open millisecond range `[min_ms, max_ms)` the delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_MIN_DELAY_MS,
            max_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, GameError> {
        if min_ms >= max_ms {
            return Err(GameError::InvalidDelayRange { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Uniform whole-millisecond sample.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..self.max_ms))
    }

    pub fn contains(&self, delay: Duration) -> bool {
        let ms = delay.as_millis();
        ms >= u128::from(self.min_ms) && ms < u128::from(self.max_ms)
    }
}
