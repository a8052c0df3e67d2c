//! Batch gradient descent on the squared-error objective.
//!
//! ## Purpose
//!
//! This module fits the line iteratively: starting from `(0, 0)` it moves the
//! coefficients against the gradient of the squared-error loss, scaled by a
//! learning rate, until the gradient norm falls below a tolerance.
//!
//! ## Design notes
//!
//! * **Lazy iteration**: [`DescentSteps`] yields every intermediate state;
//!   the solver is a consumer that applies the stopping rules.
//! * **O(1) steps**: Gradients come from `SufficientStats`, so each step is
//!   independent of the number of observations.
//! * **Delayed check**: Convergence is tested on the gradient computed
//!   *before* the update that produced the current coefficients. At least one
//!   update is always performed.
//!
//! ## Key concepts
//!
//! * **Learning rate**: Must suit the scale of the data. Too large a value
//!   makes the iterates grow without bound.
//! * **Divergence**: A non-finite gradient norm stops the loop with
//!   [`LinregError::Diverged`].
//! * **Iteration cap**: Unbounded by default; an optional cap stops the loop
//!   with [`LinregError::DidNotConverge`].
//!
//! ## Invariants
//!
//! * Step `k` (1-based) carries the coefficients after `k` updates.
//! * Iteration is deterministic for a given observation set and configuration.
//!
//! ## Non-goals
//!
//! * This module does not adapt the learning rate or use momentum.
//! * This module does not retain intermediate iterates.

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::{Solution, Solver};
use crate::math::loss::Gradient;
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::LinregError;
use crate::primitives::stats::SufficientStats;

// ============================================================================
// Configuration
// ============================================================================

/// Gradient descent hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientDescent<T> {
    /// Step size applied to the gradient.
    pub learning_rate: T,

    /// Gradient norm below which the descent stops.
    pub tolerance: T,

    /// Optional cap on the number of updates (unbounded when `None`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_iterations: Option<usize>,
}

impl<T: Float> GradientDescent<T> {
    /// Create an unbounded gradient descent configuration.
    pub fn new(learning_rate: T, tolerance: T) -> Self {
        Self {
            learning_rate,
            tolerance,
            max_iterations: None,
        }
    }

    /// Cap the number of updates.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Lazily iterate over the descent, starting from `(0, 0)`.
    pub fn steps<'a>(&self, stats: &'a SufficientStats<T>) -> DescentSteps<'a, T> {
        DescentSteps {
            stats,
            learning_rate: self.learning_rate,
            slope: T::zero(),
            intercept: T::zero(),
            iteration: 0,
        }
    }
}

impl<T: Float> Solver<T> for GradientDescent<T> {
    fn solve(&self, stats: &SufficientStats<T>) -> Result<Solution<T>, LinregError> {
        let mut steps = self.steps(stats);

        loop {
            let step = steps.advance();
            let norm = step.gradient_norm;

            trace!(
                iteration = step.iteration,
                gradient_norm = norm.to_f64().unwrap_or(f64::NAN),
                "gradient descent step"
            );

            if !norm.is_finite() {
                return Err(LinregError::Diverged {
                    iterations: step.iteration,
                });
            }

            if norm < self.tolerance {
                debug!(
                    iterations = step.iteration,
                    gradient_norm = norm.to_f64().unwrap_or(f64::NAN),
                    "gradient descent converged"
                );
                return Ok(Solution {
                    coefficients: step.coefficients,
                    iterations: Some(step.iteration),
                    gradient_norm: Some(norm),
                });
            }

            if self.max_iterations.is_some_and(|max| step.iteration >= max) {
                return Err(LinregError::DidNotConverge {
                    iterations: step.iteration,
                    gradient_norm: norm.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
    }
}

// ============================================================================
// Step Iterator
// ============================================================================

/// One update of gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentStep<T> {
    /// Number of updates performed so far (1-based).
    pub iteration: usize,

    /// Coefficients after this update.
    pub coefficients: Coefficients<T>,

    /// Gradient evaluated before this update.
    pub gradient: Gradient<T>,

    /// Norm of `gradient`.
    pub gradient_norm: T,
}

/// Infinite iterator over gradient descent updates.
///
/// Never returns `None`; bound it with `take`, `take_while`, or a consumer
/// that applies a stopping rule.
#[derive(Debug, Clone)]
pub struct DescentSteps<'a, T> {
    stats: &'a SufficientStats<T>,
    learning_rate: T,
    slope: T,
    intercept: T,
    iteration: usize,
}

impl<T: Float> DescentSteps<'_, T> {
    /// Perform one update and report it.
    pub fn advance(&mut self) -> DescentStep<T> {
        let gradient = Gradient::at(self.stats, self.slope, self.intercept);

        self.slope = self.slope - self.learning_rate * gradient.d_slope;
        self.intercept = self.intercept - self.learning_rate * gradient.d_intercept;
        self.iteration += 1;

        DescentStep {
            iteration: self.iteration,
            coefficients: Coefficients::new(self.slope, self.intercept),
            gradient,
            gradient_norm: gradient.norm(),
        }
    }
}

impl<T: Float> Iterator for DescentSteps<'_, T> {
    type Item = DescentStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}
