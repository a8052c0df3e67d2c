//! Squared-error objective and its gradient.
//!
//! ## Purpose
//!
//! This module defines the objective both solvers minimize,
//! `L(a, b) = Σ(y − a·x − b)²`, and the gradient used by gradient descent.
//!
//! ## Design notes
//!
//! * **Sufficient statistics**: The gradient is evaluated from `SufficientStats`
//!   in O(1), since every sum it needs is linear in the data.
//! * **Scaling**: Gradients are averaged over `n` (the `2/n` factor), so the
//!   learning rate does not need to shrink with the sample size.
//!
//! ## Key concepts
//!
//! ```text
//! dL/da = -2/n · (Σxy − a·Σx² − b·Σx)
//! dL/db = -2/n · (Σy  − a·Σx  − b·n)
//! |∇L|  = sqrt((dL/da)² + (dL/db)²)
//! ```
//!
//! ## Non-goals
//!
//! * This module does not take optimization steps (see gradient descent).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::coefficients::Coefficients;
use crate::primitives::stats::SufficientStats;

// ============================================================================
// Objective
// ============================================================================

/// Squared-error loss `Σ(y − a·x − b)²` of a line over paired observations.
pub fn squared_error_loss<T: Float>(x: &[T], y: &[T], coefficients: &Coefficients<T>) -> T {
    x.iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&xi, &yi)| {
            let r = yi - coefficients.apply(xi);
            acc + r * r
        })
}

// ============================================================================
// Gradient
// ============================================================================

/// Partial derivatives of the (sample-averaged) squared-error loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient<T> {
    /// dL/da.
    pub d_slope: T,

    /// dL/db.
    pub d_intercept: T,
}

impl<T: Float> Gradient<T> {
    /// Evaluate the gradient at `(slope, intercept)`.
    pub fn at(stats: &SufficientStats<T>, slope: T, intercept: T) -> Self {
        let two = T::from(2.0).unwrap();

        let sum_a = stats.sum_xy - slope * stats.sum_xx - intercept * stats.sum_x;
        let sum_b = stats.sum_y - slope * stats.sum_x - intercept * stats.n;

        Self {
            d_slope: -two * sum_a / stats.n,
            d_intercept: -two * sum_b / stats.n,
        }
    }

    /// Euclidean norm of the gradient.
    #[inline]
    pub fn norm(&self) -> T {
        (self.d_slope * self.d_slope + self.d_intercept * self.d_intercept).sqrt()
    }
}
