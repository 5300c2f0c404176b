use thiserror::Error;

/// Errors raised by the specification bookkeeping layer.
///
/// These are caller contract violations. A value that simply fails to satisfy
/// a property is not an error and is reported as `false` instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpecError {
    #[error("Constraint threshold must be finite, got {0}")]
    InvalidThreshold(f64),

    #[error("Epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    #[error("Formula '{0}' carries no comparison bound")]
    MissingComparison(String),

    #[error("Formula '{0}' carries no optimization direction")]
    MissingDirection(String),

    #[error("Value {value} does not improve the current optimum {optimum:?}")]
    NotAnImprovement { value: f64, optimum: Option<f64> },

    #[error("No optimum has been recorded yet")]
    UnknownOptimum,

    #[error("Specification result has no undecided property left to refine")]
    NoUndecidedResult,

    #[error("Expected {expected} constraint results, got {actual}")]
    ResultCountMismatch { expected: usize, actual: usize },

    #[error("Hole {0} has no remaining options")]
    EmptyHole(usize),
}

/// Result type specific to specification bookkeeping
pub type SpecResult<T> = Result<T, SpecError>;
