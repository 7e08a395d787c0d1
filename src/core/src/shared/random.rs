use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Injected randomness capability for the match engine.
///
/// The engine never seeds or owns a global generator; every probabilistic
/// decision goes through this trait so a match can be replayed
/// deterministically from a seed.
pub trait RandomEngine {
    /// Roll against a percentage in [0, 100]. Values at or above 100
    /// always succeed, values at or below 0 never do.
    fn chance(&mut self, percent: f32) -> bool;

    /// Uniform integer in [min, max] (both inclusive).
    fn get_int(&mut self, min: i32, max: i32) -> i32;

    fn pick_one<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let index = self.get_int(0, items.len() as i32 - 1) as usize;
        items.get(index)
    }
}

impl<R: Rng> RandomEngine for R {
    fn chance(&mut self, percent: f32) -> bool {
        if percent >= 100.0 {
            return true;
        }

        if percent <= 0.0 {
            return false;
        }

        self.random_range(0.0..100.0) < percent
    }

    fn get_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }

        self.random_range(min..=max)
    }
}

/// Entropy-seeded generator used outside of tests.
pub fn std_random() -> StdRng {
    StdRng::from_os_rng()
}

/// Deterministic generator for replays and tests.
pub fn seeded_random(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
