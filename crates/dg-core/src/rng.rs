//! Random number generation
//!
//! Uses a seeded ChaCha RNG so that a layout can be reproduced from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source
///
/// Wraps ChaCha8Rng and remembers the seed it was built from.
#[derive(Debug, Clone)]
pub struct GenRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GenRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Create from an optional seed, falling back to entropy
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns an index in 0..len
    ///
    /// Returns 0 if len is 0.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    /// Uniform value in [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Uniform value in [-1, 1)
    pub fn signed_unit(&mut self) -> f64 {
        self.rng.gen_range(-1.0..1.0)
    }

    /// Returns -1.0 or 1.0 with equal probability
    pub fn sign(&mut self) -> f64 {
        if self.rng.gen_bool(0.5) { -1.0 } else { 1.0 }
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }
}

impl Default for GenRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Normally distributed samples via the polar Box–Muller method.
///
/// Each accepted point yields two independent samples; the second one is kept
/// here and handed out on the next call.
#[derive(Debug, Clone, Default)]
pub struct NormalSampler {
    cached: Option<f64>,
}

impl NormalSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one sample from N(mean, stddev²)
    pub fn sample(&mut self, rng: &mut GenRng, mean: f64, stddev: f64) -> f64 {
        if let Some(z) = self.cached.take() {
            return z * stddev + mean;
        }

        let (z0, z1) = Self::standard_pair(rng);
        self.cached = Some(z1);
        z0 * stddev + mean
    }

    /// Whether a second sample is waiting
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    fn standard_pair(rng: &mut GenRng) -> (f64, f64) {
        loop {
            let x = rng.signed_unit();
            let y = rng.signed_unit();
            let r = x * x + y * y;
            if r == 0.0 || r > 1.0 {
                continue;
            }
            let d = (-2.0 * r.ln() / r).sqrt();
            return (x * d, y * d);
        }
    }
}
