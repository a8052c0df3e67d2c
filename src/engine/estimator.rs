//! Linear regression estimator: configuration plus fitted state.
//!
//! ## Purpose
//!
//! This module provides [`LinearRegressor`], which owns a validated
//! [`FitMode`] and the coefficients produced by the last successful `fit`.
//! It dispatches fitting to the selected solver and applies the fitted line
//! in `predict`.
//!
//! ## Design notes
//!
//! * **Borrowed data**: Observations are borrowed for the duration of `fit`
//!   and never retained.
//! * **Single writer**: `fit` takes `&mut self`; queries take `&self`.
//! * **Atomic updates**: Fitted state is only replaced when `fit` succeeds.
//!
//! ## Key concepts
//!
//! * **Degenerate input**: With zero-variance `x` the closed form divides by
//!   zero. [`DegeneratePolicy`] selects whether the non-finite coefficients
//!   are stored (`Propagate`, default) or rejected (`Reject`).
//!
//! ## Invariants
//!
//! * `coefficients()` is `None` until the first successful `fit`.
//! * `predict(x) == slope * x + intercept` for the stored coefficients.
//!
//! ## Non-goals
//!
//! * This module does not persist fitted models.
//! * This module does not support concurrent fitting of one instance.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::{FitMode, Solver};
use crate::engine::output::FitReport;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::loss::squared_error_loss;
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::LinregError;
use crate::primitives::stats::SufficientStats;

// ============================================================================
// Degenerate Input Policy
// ============================================================================

/// Handling of fits that produce non-finite coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegeneratePolicy {
    /// Store and return the non-finite coefficients (default).
    #[default]
    Propagate,

    /// Fail with [`LinregError::DegenerateInput`] and keep the previous state.
    Reject,
}

// ============================================================================
// Estimator
// ============================================================================

/// Simple linear regression estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor<T> {
    mode: FitMode<T>,
    degenerate_policy: DegeneratePolicy,
    return_diagnostics: bool,
    coefficients: Option<Coefficients<T>>,
}

impl<T: Float> LinearRegressor<T> {
    /// Create an unfitted regressor from a tagged configuration.
    pub fn new(mode: FitMode<T>) -> Result<Self, LinregError> {
        Validator::validate_mode(&mode)?;
        Ok(Self::from_parts(mode, DegeneratePolicy::default(), false))
    }

    /// Assemble a regressor from already-validated parts.
    pub(crate) fn from_parts(
        mode: FitMode<T>,
        degenerate_policy: DegeneratePolicy,
        return_diagnostics: bool,
    ) -> Self {
        Self {
            mode,
            degenerate_policy,
            return_diagnostics,
            coefficients: None,
        }
    }

    /// Set the degenerate input policy.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Include diagnostics in every [`FitReport`].
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The fitting configuration.
    pub fn mode(&self) -> &FitMode<T> {
        &self.mode
    }

    /// The degenerate input policy.
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }

    /// Coefficients from the last successful fit.
    pub fn coefficients(&self) -> Option<Coefficients<T>> {
        self.coefficients
    }

    /// Whether `fit` has succeeded at least once.
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit the line to paired observations and store the coefficients.
    pub fn fit(&mut self, x: &[T], y: &[T]) -> Result<FitReport<T>, LinregError> {
        Validator::validate_inputs(x, y)?;

        let method = self.mode.method();
        debug!(%method, n_points = x.len(), "fitting linear regression");

        let stats = SufficientStats::from_observations(x, y);
        let solution = self.mode.solve(&stats)?;
        let coefficients = solution.coefficients;

        if !coefficients.is_finite() {
            match self.degenerate_policy {
                DegeneratePolicy::Reject => return Err(LinregError::DegenerateInput),
                DegeneratePolicy::Propagate => warn!(
                    %method,
                    "non-finite coefficients; x likely has zero variance"
                ),
            }
        }

        self.coefficients = Some(coefficients);

        debug!(
            slope = coefficients.slope.to_f64().unwrap_or(f64::NAN),
            intercept = coefficients.intercept.to_f64().unwrap_or(f64::NAN),
            iterations = solution.iterations,
            "fit complete"
        );

        let diagnostics = if self.return_diagnostics {
            Some(Diagnostics::compute(x, y, &coefficients))
        } else {
            None
        };

        Ok(FitReport {
            coefficients,
            method,
            n_points: x.len(),
            iterations_used: solution.iterations,
            gradient_norm: solution.gradient_norm,
            loss: squared_error_loss(x, y, &coefficients),
            diagnostics,
        })
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: T) -> Result<T, LinregError> {
        Ok(self.fitted()?.apply(x))
    }

    /// Evaluate the fitted line at every element of `x`.
    pub fn predict_many(&self, x: &[T]) -> Result<Vec<T>, LinregError> {
        let coefficients = self.fitted()?;
        Ok(x.iter().map(|&xi| coefficients.apply(xi)).collect())
    }

    /// Coefficient of determination (R²) of the fitted line on `x`, `y`.
    pub fn score(&self, x: &[T], y: &[T]) -> Result<T, LinregError> {
        let coefficients = self.fitted()?;
        Validator::validate_inputs(x, y)?;
        Ok(Diagnostics::compute(x, y, coefficients).r_squared)
    }

    /// Squared-error loss of the fitted line on `x`, `y`.
    pub fn loss(&self, x: &[T], y: &[T]) -> Result<T, LinregError> {
        let coefficients = self.fitted()?;
        Validator::validate_inputs(x, y)?;
        Ok(squared_error_loss(x, y, coefficients))
    }

    fn fitted(&self) -> Result<&Coefficients<T>, LinregError> {
        self.coefficients.as_ref().ok_or(LinregError::NotFitted)
    }
}
