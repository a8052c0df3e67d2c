//! Error types for linear regression configuration, fitting and prediction.
//!
//! ## Purpose
//!
//! This module defines [`LinregError`], the single error type returned by
//! every fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is
//!   only implemented with the `std` feature.
//! * **Comparable**: Errors are `Clone + PartialEq` so tests can match on them.
//!
//! ## Key concepts
//!
//! * **Configuration errors**: Raised by the builder before any data is seen.
//! * **Input errors**: Structural problems with the observation set.
//! * **Fitting errors**: Degenerate input (opt-in) and gradient descent
//!   failures (divergence, iteration cap).
//! * **State errors**: Using the model before it has been fitted.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while configuring, fitting, or querying a linear regression.
#[derive(Debug, Clone, PartialEq)]
pub enum LinregError {
    /// `x` or `y` contains no observations.
    EmptyInput,

    /// `x` and `y` have different lengths.
    MismatchedInputs {
        /// Number of `x` values.
        x_len: usize,
        /// Number of `y` values.
        y_len: usize,
    },

    /// A hyperparameter required by the selected fitting method was not set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Learning rate is not finite or not strictly positive.
    InvalidLearningRate(f64),

    /// Convergence tolerance is not finite or not strictly positive.
    InvalidTolerance(f64),

    /// Iteration cap of zero.
    InvalidMaxIterations(usize),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The model was queried before a successful `fit`.
    NotFitted,

    /// All `x` values are equal, so the slope is undefined.
    DegenerateInput,

    /// Gradient descent reached its iteration cap before converging.
    DidNotConverge {
        /// Number of updates performed.
        iterations: usize,
        /// Gradient norm at the last update.
        gradient_norm: f64,
    },

    /// Gradient descent produced a non-finite gradient.
    Diverged {
        /// Number of updates performed before the gradient became non-finite.
        iterations: usize,
    },
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for LinregError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::MissingParameter { parameter } => write!(
                f,
                "Missing parameter '{}': required for iterative fitting",
                parameter
            ),
            Self::InvalidLearningRate(lr) => {
                write!(f, "Invalid learning_rate: {} (must be > 0 and finite)", lr)
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            Self::InvalidMaxIterations(n) => {
                write!(f, "Invalid max_iterations: {} (must be at least 1)", n)
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::NotFitted => write!(f, "Model is not fitted: call fit before using it"),
            Self::DegenerateInput => {
                write!(f, "Degenerate input: x has zero variance, slope is undefined")
            }
            Self::DidNotConverge {
                iterations,
                gradient_norm,
            } => write!(
                f,
                "Gradient descent did not converge after {} iterations (gradient norm {})",
                iterations, gradient_norm
            ),
            Self::Diverged { iterations } => write!(
                f,
                "Gradient descent diverged after {} iterations (try a smaller learning_rate)",
                iterations
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinregError {}
