//! Errors.

use thiserror::Error;

/// An error that stopped a simulation run.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SimulationError {
    /// A count or timing range in the configuration is unusable.
    ///
    /// Raised before any trial runs.
    #[error("Invalid configuration: `{field}` {reason}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The randomness source could not produce a draw.
    ///
    /// Aborts the whole batch.
    #[error("Random source failed: {0}")]
    RandomSource(#[from] RandomSourceError),
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// An error raised by a [`RandomSource`](crate::random::RandomSource).
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RandomSourceError {
    /// A finite source has no more draws to give.
    #[error("Random source exhausted")]
    Exhausted,

    /// The source failed for some other reason, e.g. an entropy read.
    #[error("Random source failure: {0}")]
    Failure(String),

    /// The requested range is empty or not finite.
    #[error("Cannot sample from the range [{low}, {high}]")]
    InvalidRange {
        /// Lower bound requested.
        low: f64,
        /// Upper bound requested.
        high: f64,
    },

    /// The source returned a value outside the requested range.
    #[error("Draw {value} is outside the requested range [{low}, {high}]")]
    OutOfRange {
        /// The value drawn.
        value: f64,
        /// Lower bound requested.
        low: f64,
        /// Upper bound requested.
        high: f64,
    },
}

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_source_errors_convert() {
        let err: SimulationError = RandomSourceError::Exhausted.into();
        assert_eq!(err, SimulationError::RandomSource(RandomSourceError::Exhausted));
    }

    #[test]
    fn invalid_configuration_names_the_field() {
        let err = SimulationError::invalid("staff_rice", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: `staff_rice` must be at least 1"
        );
    }
}
