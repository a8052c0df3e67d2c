//! Input validation for regression configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for the fitting configuration
//! and the structural shape of the observation set.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Shape only**: Observation values are not inspected; NaN or infinite
//!   inputs flow through to the solvers.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Required Parameters**: Iterative fitting needs both a learning rate
//!   and a tolerance.
//! * **Parameter Bounds**: Learning rate and tolerance must be finite and
//!   strictly positive; an iteration cap must be at least 1.
//!
//! ## Invariants
//!
//! * A `FitMode` that passes [`Validator::validate_mode`] can be solved.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not detect zero-variance input (see `DegeneratePolicy`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::FitMode;
use crate::primitives::errors::LinregError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression configuration and input data.
///
/// Provides static methods that return `Result<(), LinregError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the shape of paired observations.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), LinregError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(LinregError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(LinregError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a complete fitting configuration.
    pub fn validate_mode<T: Float>(mode: &FitMode<T>) -> Result<(), LinregError> {
        match mode {
            FitMode::Analytical => Ok(()),
            FitMode::GradientDescent(gd) => {
                Self::validate_learning_rate(gd.learning_rate)?;
                Self::validate_tolerance(gd.tolerance)?;
                if let Some(max) = gd.max_iterations {
                    Self::validate_max_iterations(max)?;
                }
                Ok(())
            }
        }
    }

    /// Ensure a parameter required by iterative fitting was provided.
    pub fn require<T>(value: Option<T>, parameter: &'static str) -> Result<T, LinregError> {
        value.ok_or(LinregError::MissingParameter { parameter })
    }

    /// Validate the gradient descent learning rate.
    pub fn validate_learning_rate<T: Float>(lr: T) -> Result<(), LinregError> {
        if !lr.is_finite() || lr <= T::zero() {
            return Err(LinregError::InvalidLearningRate(
                lr.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), LinregError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(LinregError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate an iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), LinregError> {
        if max_iterations == 0 {
            return Err(LinregError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LinregError> {
        if let Some(param) = duplicate_param {
            return Err(LinregError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
