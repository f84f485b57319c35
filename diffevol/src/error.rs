//! Error types for the Differential Evolution optimizer.
//!
//! Every error is raised synchronously: bounds and configuration problems at
//! construction time, before the objective is ever evaluated, and
//! [`DEError::NotEvaluated`] when a result is queried before a run finished.

use thiserror::Error;

/// Errors that can occur while setting up or querying a DE run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DEError {
    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// No parameter bounds were given.
    #[error("bounds are empty: at least one free parameter is required")]
    EmptyBounds,

    /// A bound pair is not finite or its lower end is not below its upper end.
    #[error("invalid bounds at index {index}: lower ({lower}) must be finite and < upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Population size is too small for rand/1 mutation (must be >= 4).
    #[error("population size ({pop_size}) must be >= 4")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Differential weight F must be finite and strictly positive.
    #[error("invalid differential weight: {factor} (must be > 0)")]
    InvalidDifferentialWeight {
        /// The invalid differential weight
        factor: f64,
    },

    /// Crossover probability is out of valid range [0, 1].
    #[error("invalid crossover probability: {rate} (must be in [0, 1])")]
    InvalidCrossoverProbability {
        /// The invalid crossover probability
        rate: f64,
    },

    /// At least one generation must be run.
    #[error("invalid generation count: {n_gen} (must be >= 1)")]
    InvalidGenerationCount {
        /// The invalid generation count
        n_gen: usize,
    },

    /// The result was queried before any run completed.
    #[error("no generation has been evaluated yet")]
    NotEvaluated,
}

/// A specialized `Result` type for DE operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
    /// Returns `true` if this is a bounds-related error.
    ///
    /// This includes `BoundsMismatch`, `EmptyBounds` and `InvalidBounds`.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            DEError::BoundsMismatch { .. } | DEError::EmptyBounds | DEError::InvalidBounds { .. }
        )
    }

    /// Returns `true` if the population is too small.
    pub fn is_size_error(&self) -> bool {
        matches!(self, DEError::PopulationTooSmall { .. })
    }

    /// Returns `true` if an algorithm coefficient is out of range.
    ///
    /// This includes `InvalidDifferentialWeight`, `InvalidCrossoverProbability`
    /// and `InvalidGenerationCount`.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            DEError::InvalidDifferentialWeight { .. }
                | DEError::InvalidCrossoverProbability { .. }
                | DEError::InvalidGenerationCount { .. }
        )
    }

    /// Returns `true` if the result was queried before a run.
    pub fn is_not_evaluated(&self) -> bool {
        matches!(self, DEError::NotEvaluated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DEError::BoundsMismatch {
            lower_len: 3,
            upper_len: 5,
        };
        assert_eq!(
            err.to_string(),
            "bounds mismatch: lower has 3 elements, upper has 5"
        );

        let err = DEError::PopulationTooSmall { pop_size: 3 };
        assert_eq!(err.to_string(), "population size (3) must be >= 4");
    }

    #[test]
    fn test_is_bounds_error() {
        let bounds_err = DEError::InvalidBounds {
            index: 0,
            lower: 5.0,
            upper: 3.0,
        };
        let size_err = DEError::PopulationTooSmall { pop_size: 2 };

        assert!(bounds_err.is_bounds_error());
        assert!(DEError::EmptyBounds.is_bounds_error());
        assert!(!size_err.is_bounds_error());
    }

    #[test]
    fn test_is_parameter_error() {
        let weight_err = DEError::InvalidDifferentialWeight { factor: 0.0 };
        let rate_err = DEError::InvalidCrossoverProbability { rate: 1.5 };
        let gen_err = DEError::InvalidGenerationCount { n_gen: 0 };

        assert!(weight_err.is_parameter_error());
        assert!(rate_err.is_parameter_error());
        assert!(gen_err.is_parameter_error());
        assert!(!DEError::NotEvaluated.is_parameter_error());
        assert!(!weight_err.is_size_error());
    }

    #[test]
    fn test_is_not_evaluated() {
        assert!(DEError::NotEvaluated.is_not_evaluated());
        assert!(!DEError::EmptyBounds.is_not_evaluated());
    }
}
