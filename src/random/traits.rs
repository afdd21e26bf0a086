// src/random/traits.rs

use crate::error::RandomSourceError;
use std::fmt::Debug;

/// A source of uniform randomness for the trial model.
///
/// Implementations may be backed by a seeded generator, OS entropy, or a
/// fixed script of values for tests.
pub trait RandomSource: Debug + Send {
    /// Draws a real number uniformly from `[low, high)`.
    ///
    /// # Arguments
    /// * `low` - Inclusive lower bound.
    /// * `high` - Upper bound. A scripted source may return it exactly.
    fn uniform_real(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError>;

    /// Draws an integer uniformly from `[low, high]`, both ends inclusive.
    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64, RandomSourceError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform_real(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError> {
        (**self).uniform_real(low, high)
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64, RandomSourceError> {
        (**self).uniform_int(low, high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn uniform_real(&mut self, low: f64, high: f64) -> Result<f64, RandomSourceError> {
        (**self).uniform_real(low, high)
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> Result<i64, RandomSourceError> {
        (**self).uniform_int(low, high)
    }
}
