//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the two fitting strategies and the tagged
//! configuration that selects between them:
//! - `AnalyticalSolver`: closed-form least squares
//! - `GradientDescent`: iterative descent on the squared-error loss
//! - `FitMode`: `Analytical | GradientDescent(..)`
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::coefficients::Coefficients;
use crate::primitives::errors::LinregError;
use crate::primitives::stats::SufficientStats;

/// Closed-form least-squares solver.
pub mod analytical;

/// Batch gradient descent solver and step iterator.
pub mod gradient_descent;

use analytical::AnalyticalSolver;
use gradient_descent::GradientDescent;

// ============================================================================
// Solver Interface
// ============================================================================

/// Output of a solver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Fitted coefficients.
    pub coefficients: Coefficients<T>,

    /// Number of updates performed (iterative solvers only).
    pub iterations: Option<usize>,

    /// Gradient norm that satisfied the stopping rule (iterative solvers only).
    pub gradient_norm: Option<T>,
}

/// A strategy that fits a line from sufficient statistics.
pub trait Solver<T: Float> {
    /// Fit the line.
    fn solve(&self, stats: &SufficientStats<T>) -> Result<Solution<T>, LinregError>;
}

// ============================================================================
// Fit Mode
// ============================================================================

/// Fitting method selector used by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMethod {
    /// Closed-form least squares (default).
    #[default]
    Analytical,

    /// Batch gradient descent; requires a learning rate and a tolerance.
    Iterative,
}

/// Validated fitting configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode<T> {
    /// Closed-form least squares.
    Analytical,

    /// Batch gradient descent with its hyperparameters.
    GradientDescent(GradientDescent<T>),
}

impl<T> FitMode<T> {
    /// The method this mode belongs to.
    pub fn method(&self) -> FitMethod {
        match self {
            Self::Analytical => FitMethod::Analytical,
            Self::GradientDescent(_) => FitMethod::Iterative,
        }
    }
}

impl<T: Float> Solver<T> for FitMode<T> {
    fn solve(&self, stats: &SufficientStats<T>) -> Result<Solution<T>, LinregError> {
        match self {
            Self::Analytical => AnalyticalSolver.solve(stats),
            Self::GradientDescent(gd) => gd.solve(stats),
        }
    }
}

impl core::fmt::Display for FitMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Analytical => write!(f, "Analytical"),
            Self::Iterative => write!(f, "Iterative"),
        }
    }
}
