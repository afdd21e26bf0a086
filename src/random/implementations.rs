// src/random/implementations.rs

use crate::error::RandomSourceError;
use crate::random::traits::RandomSource;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use std::collections::VecDeque;
use std::fmt::Debug;

// =========================================================================
// 1. Generator-backed Source
// =========================================================================

/// Samples from any `rand` generator through `rand_distr::Uniform`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R> RngSource<R>
where
    R: Rng + Debug + Send,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible stream: the same seed always yields the same batch.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds a fresh generator from the operating system.
    pub fn from_os_entropy() -> Result<Self, RandomSourceError> {
        StdRng::from_rng(OsRng)
            .map(Self::new)
            .map_err(|e| RandomSourceError::Failure(e.to_string()))
    }
}

impl<R> RandomSource for RngSource<R>
where
    R: Rng + Debug + Send,
{
    fn uniform_real(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError> {
        if !(high - low).is_finite() || low > high {
            return Err(RandomSourceError::InvalidRange { low, high });
        }
        if low == high {
            return Ok(low);
        }
        Ok(Uniform::new(low, high).sample(&mut self.rng))
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64, RandomSourceError> {
        if low > high {
            return Err(RandomSourceError::InvalidRange {
                low: low as f64,
                high: high as f64,
            });
        }
        Ok(Uniform::new_inclusive(low, high).sample(&mut self.rng))
    }
}

// =========================================================================
// 2. Constant Source
// =========================================================================

/// Returns the same real and the same integer for every draw.
///
/// The requested range is ignored; the engine still rejects constants
/// that fall outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource {
    real: f64,
    int: i64,
}

impl ConstantSource {
    pub fn new(real: f64, int: i64) -> Self {
        Self { real, int }
    }
}

impl RandomSource for ConstantSource {
    fn uniform_real(&mut self, _low: f64, _high: f64) -> Result<f64, RandomSourceError> {
        Ok(self.real)
    }

    fn uniform_int(&mut self, _low: i64, _high: i64) -> Result<i64, RandomSourceError> {
        Ok(self.int)
    }
}

// =========================================================================
// 3. Scripted Source
// =========================================================================

/// Replays fixed sequences of draws, then reports exhaustion.
///
/// Reals and integers are consumed from separate queues, in order.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    reals: VecDeque<f64>,
    ints: VecDeque<i64>,
}

impl SequenceSource {
    pub fn new(
        reals: impl IntoIterator<Item = f64>,
        ints: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            reals: reals.into_iter().collect(),
            ints: ints.into_iter().collect(),
        }
    }

    /// Draws not yet consumed, as `(reals, ints)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.reals.len(), self.ints.len())
    }
}

impl RandomSource for SequenceSource {
    fn uniform_real(&mut self, _low: f64, _high: f64) -> Result<f64, RandomSourceError> {
        self.reals.pop_front().ok_or(RandomSourceError::Exhausted)
    }

    fn uniform_int(&mut self, _low: i64, _high: i64) -> Result<i64, RandomSourceError> {
        self.ints.pop_front().ok_or(RandomSourceError::Exhausted)
    }
}
