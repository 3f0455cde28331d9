use crate::domain::{DelayRange, DelaySource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Draws waiting delays uniformly from a [`DelayRange`].
///
/// A fixed seed makes the delay sequence reproducible across runs; without one the
/// generator is seeded from OS entropy.
#[derive(Debug, Clone)]
pub struct RandomDelay {
    range: DelayRange,
    rng: StdRng,
}

impl RandomDelay {
    pub fn new(range: DelayRange, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { range, rng }
    }

    pub fn range(&self) -> DelayRange {
        self.range
    }
}

impl DelaySource for RandomDelay {
    fn next_delay(&mut self) -> Duration {
        self.range.sample(&mut self.rng)
    }
}
