//! Randomness used by the opening and fallback moves and the coin toss

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::board::BOARD_SIZE;

/// Uniform coordinate generator. Swap in a scripted source for
/// deterministic tests.
pub trait RandomSource {
    /// Uniform integer in `[0, 18]`
    fn next_coord(&mut self) -> u8;

    /// Fair coin: `true` is heads
    fn coin_toss(&mut self) -> bool {
        self.next_coord() % 2 == 0
    }
}

impl RandomSource for StdRng {
    fn next_coord(&mut self) -> u8 {
        self.gen_range(0..BOARD_SIZE as u8)
    }

    fn coin_toss(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

impl RandomSource for ThreadRng {
    fn next_coord(&mut self) -> u8 {
        self.gen_range(0..BOARD_SIZE as u8)
    }

    fn coin_toss(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Seeded when a seed is given, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Replays a fixed list of coordinates, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_coord(&mut self) -> u8 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % BOARD_SIZE as u8
    }
}
