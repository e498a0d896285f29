//! Weighted distribution and sampler
//!
//! Uses the xoshiro256++ PRNG by default. Any `rand::Rng` can be injected
//! through [`WeightedSampler::with_rng`], which is how tests pin the stream.

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::ops::Range;
use thiserror::Error;

/// Errors raised when building a [`WeightedDistribution`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("distribution has no entries")]
    Empty,

    #[error("distribution total weight is zero")]
    ZeroTotalWeight,

    #[error("distribution total weight overflows u32")]
    WeightOverflow,
}

/// An immutable, ordered set of `(value, weight)` pairs
///
/// Individual entries may carry a weight of zero (they are never drawn),
/// but the total weight must be positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedDistribution<T> {
    entries: Vec<(T, u32)>,
    total: u32,
}

impl<T> WeightedDistribution<T> {
    /// Build a distribution from ordered `(value, weight)` pairs
    pub fn new<I>(entries: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let entries: Vec<(T, u32)> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(DistributionError::Empty);
        }

        let total = entries
            .iter()
            .try_fold(0u32, |acc, (_, weight)| acc.checked_add(*weight))
            .ok_or(DistributionError::WeightOverflow)?;
        if total == 0 {
            return Err(DistributionError::ZeroTotalWeight);
        }

        Ok(Self { entries, total })
    }

    /// Sum of all weights (always > 0)
    #[inline]
    pub fn total_weight(&self) -> u32 {
        self.total
    }

    /// Number of entries, including zero-weight ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[(T, u32)] {
        &self.entries
    }

    /// The first-inserted value, returned when a draw matches no range
    pub fn first(&self) -> &T {
        &self.entries[0].0
    }

    /// Map a draw in `[0, total)` to its value
    ///
    /// Walks the entries in order, accumulating weights, and returns the
    /// first value whose range `[running, running + weight)` contains `r`.
    /// A draw outside every range returns [`first`](Self::first).
    pub fn select(&self, r: u32) -> &T {
        let mut running = 0u32;
        for (value, weight) in &self.entries {
            if r >= running && r < running + weight {
                return value;
            }
            running += weight;
        }

        self.first()
    }
}

/// Draws values from weighted distributions
///
/// Each call consumes fresh randomness from the owned source. The same
/// source also serves the plain uniform draws a log line needs (response
/// size, pacing jitter) so a single seed reproduces a whole stream.
pub struct WeightedSampler<R = Xoshiro256PlusPlus> {
    rng: R,
}

impl WeightedSampler<Xoshiro256PlusPlus> {
    /// Create a sampler with a random seed
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a sampler with a specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for WeightedSampler<Xoshiro256PlusPlus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WeightedSampler<R> {
    /// Create a sampler over an arbitrary random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one value proportionally to its weight
    #[inline]
    pub fn sample<'a, T>(&mut self, distribution: &'a WeightedDistribution<T>) -> &'a T {
        let r = self.rng.gen_range(0..distribution.total_weight());
        distribution.select(r)
    }

    /// Uniform integer in `range` (half-open)
    pub fn uniform(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    /// Uniform jitter in `[0, max_secs)` seconds
    pub fn jitter(&mut self, max_secs: f64) -> f64 {
        self.rng.gen::<f64>() * max_secs
    }
}
