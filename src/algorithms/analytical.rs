//! Closed-form least-squares solver.
//!
//! ## Purpose
//!
//! This module computes the ordinary least-squares slope and intercept
//! directly from sufficient statistics, in a single pass over the data.
//!
//! ## Design notes
//!
//! * **Formula**: An algebraic rearrangement of `a = Cov(x, y) / Var(x)`,
//!   `b = ȳ − a·x̄` that avoids computing the means separately.
//! * **Precision**: No mean-centering is applied. Large-magnitude or
//!   near-collinear inputs may lose precision; pre-center such data.
//!
//! ## Key concepts
//!
//! ```text
//! a = (−Σxy + Σx·Σy/n) / (−Σx² + (Σx)²/n)
//! b = (Σy − a·Σx) / n
//! ```
//!
//! ## Invariants
//!
//! * The denominator is zero iff all `x` values are equal; the slope is then
//!   non-finite and is returned as such.
//!
//! ## Non-goals
//!
//! * This module does not detect or reject degenerate input (the estimator
//!   applies the configured `DegeneratePolicy`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::{Solution, Solver};
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::LinregError;
use crate::primitives::stats::SufficientStats;

/// Closed-form least-squares solver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticalSolver;

impl AnalyticalSolver {
    /// Compute the least-squares line.
    pub fn coefficients<T: Float>(stats: &SufficientStats<T>) -> Coefficients<T> {
        let n = stats.n;

        let num = -stats.sum_xy + stats.sum_x * stats.sum_y / n;
        let denom = -stats.sum_xx + (stats.sum_x * stats.sum_x) / n;
        let slope = num / denom;

        let intercept = (stats.sum_y - slope * stats.sum_x) / n;

        Coefficients::new(slope, intercept)
    }
}

impl<T: Float> Solver<T> for AnalyticalSolver {
    fn solve(&self, stats: &SufficientStats<T>) -> Result<Solution<T>, LinregError> {
        Ok(Solution {
            coefficients: Self::coefficients(stats),
            iterations: None,
            gradient_norm: None,
        })
    }
}
