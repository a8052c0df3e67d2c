//! Goodness-of-fit diagnostics for a fitted line.
//!
//! ## Purpose
//!
//! This module computes summary statistics describing how well a fitted line
//! explains the observations it was fitted on (or any other paired data).
//!
//! ## Design notes
//!
//! * **Single pass**: Residual sums are accumulated together.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **SSE**: Σ(y − ŷ)², the squared-error objective at the fitted line.
//! * **RMSE / MAE**: Root mean squared error and mean absolute error.
//! * **R²**: `1 − SSE/SST`. With `SST == 0` (constant `y`) it is 1 for a
//!   perfect fit and 0 otherwise.
//! * **Residual SD**: `sqrt(SSE / (n − 2))`, zero when `n <= 2`.
//!
//! ## Non-goals
//!
//! * This module does not compute intervals or standard errors.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::coefficients::Coefficients;
use crate::primitives::stats::SufficientStats;

/// Fit quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Sum of squared errors.
    pub sse: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Residual standard deviation with `n − 2` degrees of freedom.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics for `coefficients` over paired observations.
    pub fn compute(x: &[T], y: &[T], coefficients: &Coefficients<T>) -> Self {
        let n = x.len().min(y.len());
        if n == 0 {
            return Self {
                sse: T::zero(),
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sd: T::zero(),
            };
        }

        let n_t = T::from(n).unwrap();
        let mean_y = SufficientStats::from_observations(x, y).mean_y();

        let mut sse = T::zero();
        let mut sae = T::zero();
        let mut sst = T::zero();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let r = yi - coefficients.apply(xi);
            sse = sse + r * r;
            sae = sae + r.abs();

            let d = yi - mean_y;
            sst = sst + d * d;
        }

        let r_squared = if sst > T::zero() {
            T::one() - sse / sst
        } else if sse == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        let residual_sd = if n > 2 {
            (sse / T::from(n - 2).unwrap()).sqrt()
        } else {
            T::zero()
        };

        Self {
            sse,
            rmse: (sse / n_t).sqrt(),
            mae: sae / n_t,
            r_squared,
            residual_sd,
        }
    }
}

impl<T: Float + core::fmt::Display> core::fmt::Display for Diagnostics<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Linear Regression Diagnostics:")?;
        writeln!(f, "  SSE:          {:.6}", self.sse)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R^2:          {:.6}", self.r_squared)?;
        write!(f, "  Residual SD:  {:.6}", self.residual_sd)
    }
}
