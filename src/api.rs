//! High-level API for simple linear regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing the fitting method and its hyperparameters,
//! producing a validated [`LinearRegressor`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LinearRegressionBuilder`] via `LinearRegression::new()`.
//! 2. Select a method with `.method(Analytical)` (default) or `.method(Iterative)`.
//! 3. For `Iterative`, set `.learning_rate()` and `.tolerance()`.
//! 4. Call `.build()` to obtain an unfitted [`LinearRegressor`].
//!
//! Hyperparameters given in analytical mode are accepted and ignored.

use core::fmt::Debug;

use num_traits::Float;

// Internal dependencies
use crate::algorithms::gradient_descent::GradientDescent;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::gradient_descent::{DescentStep, DescentSteps};
pub use crate::algorithms::{FitMethod, FitMode};
pub use crate::engine::estimator::{DegeneratePolicy, LinearRegressor};
pub use crate::engine::output::FitReport;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::loss::Gradient;
pub use crate::primitives::coefficients::Coefficients;
pub use crate::primitives::errors::LinregError;
pub use crate::primitives::stats::SufficientStats;

/// Fluent builder for configuring a linear regression.
#[derive(Debug, Clone)]
pub struct LinearRegressionBuilder<T: Float + Debug> {
    /// Fitting method (default: Analytical).
    pub method: Option<FitMethod>,

    /// Gradient descent step size (Iterative only).
    pub learning_rate: Option<T>,

    /// Gradient norm stopping threshold (Iterative only).
    pub tolerance: Option<T>,

    /// Cap on gradient descent updates (Iterative only, default: unbounded).
    pub max_iterations: Option<usize>,

    /// Handling of non-finite coefficients (default: Propagate).
    pub degenerate_policy: Option<DegeneratePolicy>,

    /// Compute diagnostics on every fit.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for LinearRegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> LinearRegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            learning_rate: None,
            tolerance: None,
            max_iterations: None,
            degenerate_policy: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the fitting method.
    pub fn method(mut self, method: FitMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the gradient descent learning rate.
    pub fn learning_rate(mut self, learning_rate: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(learning_rate);
        self
    }

    /// Set the gradient norm below which gradient descent stops.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Cap the number of gradient descent updates.
    ///
    /// Without a cap a learning rate that is too large for the data diverges
    /// until the gradient overflows, which is reported as
    /// [`LinregError::Diverged`].
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set how non-finite coefficients (zero-variance `x`) are handled.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        if self.degenerate_policy.is_some() {
            self.duplicate_param = Some("degenerate_policy");
        }
        self.degenerate_policy = Some(policy);
        self
    }

    /// Include RMSE, MAE, R² and residual SD in every fit report.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and build an unfitted regressor.
    pub fn build(self) -> Result<LinearRegressor<T>, LinregError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mode = match self.method.unwrap_or_default() {
            FitMethod::Analytical => FitMode::Analytical,
            FitMethod::Iterative => {
                let learning_rate = Validator::require(self.learning_rate, "learning_rate")?;
                let tolerance = Validator::require(self.tolerance, "tolerance")?;
                FitMode::GradientDescent(GradientDescent {
                    learning_rate,
                    tolerance,
                    max_iterations: self.max_iterations,
                })
            }
        };

        Validator::validate_mode(&mode)?;

        Ok(LinearRegressor::from_parts(
            mode,
            self.degenerate_policy.unwrap_or_default(),
            self.return_diagnostics.unwrap_or(false),
        ))
    }
}
