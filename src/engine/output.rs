//! Output types for regression fits.
//!
//! ## Purpose
//!
//! This module defines [`FitReport`], returned by every successful `fit`.
//! It carries the fitted coefficients together with metadata about how they
//! were obtained.
//!
//! ## Design notes
//!
//! * Iteration metadata is `None` for the analytical method.
//! * Diagnostics are only populated when requested on the builder.
//! * Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `coefficients` equals the state stored in the regressor after the fit.
//! * `loss` is the squared-error objective of `coefficients` on the fitted data.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization of fitted models.

use num_traits::Float;

use crate::algorithms::FitMethod;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::coefficients::Coefficients;

// ============================================================================
// Result Structure
// ============================================================================

/// Summary of a completed fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport<T> {
    /// Fitted slope and intercept.
    pub coefficients: Coefficients<T>,

    /// Method used to obtain the coefficients.
    pub method: FitMethod,

    /// Number of observations fitted.
    pub n_points: usize,

    /// Number of gradient descent updates performed.
    pub iterations_used: Option<usize>,

    /// Gradient norm that satisfied the stopping rule.
    pub gradient_norm: Option<T>,

    /// Squared-error loss `Σ(y − a·x − b)²` at the fitted coefficients.
    pub loss: T,

    /// Fit quality metrics.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> FitReport<T> {
    /// Slope of the fitted line.
    pub fn slope(&self) -> T {
        self.coefficients.slope
    }

    /// Intercept of the fitted line.
    pub fn intercept(&self) -> T {
        self.coefficients.intercept
    }

    /// Whether the fitted coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.coefficients.is_finite()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + core::fmt::Display> core::fmt::Display for FitReport<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_points)?;
        writeln!(f, "  Method: {}", self.method)?;

        if let Some(iters) = self.iterations_used {
            writeln!(f, "  Iterations: {}", iters)?;
        }
        if let Some(norm) = self.gradient_norm {
            writeln!(f, "  Gradient norm: {:e}", norm.to_f64().unwrap_or(f64::NAN))?;
        }
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(f, "  Slope:     {:.6}", self.coefficients.slope)?;
        writeln!(f, "  Intercept: {:.6}", self.coefficients.intercept)?;
        writeln!(f, "  Loss:      {:.6}", self.loss)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "{}", diag)?;
        }

        Ok(())
    }
}
