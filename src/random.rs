use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Size of the pre-drawn pool.
pub const POOL_SIZE: usize = 1000;

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// The next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Draws straight from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRandom<R: Rng>(pub R);

impl RngRandom<ThreadRng> {
    /// Draw from the thread-local generator.
    pub fn thread() -> Self {
        RngRandom(rand::rng())
    }
}

impl RngRandom<StdRng> {
    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        RngRandom(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngRandom<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// A batch of pre-drawn values refilled in place once exhausted.
#[derive(Debug, Clone)]
pub struct PooledRandom<R: Rng = StdRng> {
    rng: R,
    pool: Vec<f64>,
    index: usize,
}

impl PooledRandom<StdRng> {
    /// Pool seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Reproducible pool.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PooledRandom<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PooledRandom<R> {
    /// Pool backed by any generator.
    pub fn with_rng(rng: R) -> Self {
        let mut pooled = Self {
            rng,
            pool: vec![0.0; POOL_SIZE],
            index: 0,
        };
        pooled.refill();
        pooled
    }

    fn refill(&mut self) {
        for slot in self.pool.iter_mut() {
            *slot = self.rng.random::<f64>();
        }
        self.index = 0;
    }
}

impl<R: Rng> RandomSource for PooledRandom<R> {
    fn next_f64(&mut self) -> f64 {
        if self.index >= self.pool.len() {
            self.refill();
        }
        let value = self.pool[self.index];
        self.index += 1;
        value
    }
}

/// Replays a fixed list of values in a loop and counts the draws.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    index: usize,
    draws: usize,
}

impl ScriptedRandom {
    /// Replay `values`. An empty script always yields `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
            draws: 0,
        }
    }

    /// How many values were handed out.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_stays_in_unit_range_across_refills() {
        let mut pool = PooledRandom::seeded(7);
        for _ in 0..(POOL_SIZE * 3 + 5) {
            let r = pool.next_f64();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn seeded_pools_agree() {
        let mut a = PooledRandom::seeded(42);
        let mut b = PooledRandom::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn scripted_cycles_and_counts() {
        let mut scripted = ScriptedRandom::new(vec![0.1, 0.9]);
        assert_eq!(scripted.next_f64(), 0.1);
        assert_eq!(scripted.next_f64(), 0.9);
        assert_eq!(scripted.next_f64(), 0.1);
        assert_eq!(scripted.draws(), 3);
    }
}
