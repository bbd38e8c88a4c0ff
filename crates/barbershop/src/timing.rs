//! # Haircut Timing
//!
//! Injectable duration source for the barber's haircuts.
//!
//! The original design reached for a hidden global generator; here the
//! barber is handed a timer so tests run on fixed durations and production
//! runs on an explicitly seeded RNG (deterministic randomness only - same
//! seed, same simulation).

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of haircut durations.
///
/// `&mut self` because random sources advance their state per draw.
pub trait HaircutTimer: Send {
    /// Returns the duration of the next haircut.
    fn haircut_duration(&mut self) -> Duration;
}

/// Timer that returns the same duration every time.
///
/// The workhorse for tests and benchmarks.
#[derive(Clone, Copy, Debug)]
pub struct FixedTimer {
    duration: Duration,
}

impl FixedTimer {
    /// Creates a timer that always reports `duration`.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl HaircutTimer for FixedTimer {
    fn haircut_duration(&mut self) -> Duration {
        self.duration
    }
}

/// Timer drawing uniformly from `[min, max]` with an explicit seed.
#[derive(Clone, Debug)]
pub struct RandomTimer {
    rng: ChaCha8Rng,
    min: Duration,
    max: Duration,
}

impl RandomTimer {
    /// Creates a seeded random timer.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn seeded(seed: u64, min: Duration, max: Duration) -> Self {
        assert!(min <= max, "haircut range is inverted");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            min,
            max,
        }
    }
}

impl HaircutTimer for RandomTimer {
    fn haircut_duration(&mut self) -> Duration {
        self.rng.gen_range(self.min..=self.max)
    }
}
