//! Sufficient statistics for simple linear regression.
//!
//! ## Purpose
//!
//! This module accumulates the five quantities that fully determine both the
//! closed-form least-squares solution and every gradient of the squared-error
//! objective: `n`, `Σx`, `Σy`, `Σxy` and `Σx²`.
//!
//! ## Design notes
//!
//! * **Single pass**: Statistics are accumulated in one traversal of the data.
//! * **Plain sums**: No mean-centering or compensated summation is applied.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `n` equals the number of accumulated pairs.
//! * Sums are accumulated in input order, so results are deterministic.
//!
//! ## Non-goals
//!
//! * This module does not validate the observations (see the validator).

// External dependencies
use num_traits::Float;

// ============================================================================
// Sufficient Statistics
// ============================================================================

/// Summary statistics of a paired observation set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SufficientStats<T> {
    /// Number of observations, as a float.
    pub n: T,

    /// Σx.
    pub sum_x: T,

    /// Σy.
    pub sum_y: T,

    /// Σ(x·y).
    pub sum_xy: T,

    /// Σ(x²).
    pub sum_xx: T,
}

impl<T: Float> SufficientStats<T> {
    /// Accumulate statistics over paired observations.
    ///
    /// Pairs beyond the shorter of the two slices are ignored; callers
    /// validate lengths beforehand.
    pub fn from_observations(x: &[T], y: &[T]) -> Self {
        let mut stats = Self {
            n: T::zero(),
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xy: T::zero(),
            sum_xx: T::zero(),
        };

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            stats.n = stats.n + T::one();
            stats.sum_x = stats.sum_x + xi;
            stats.sum_y = stats.sum_y + yi;
            stats.sum_xy = stats.sum_xy + xi * yi;
            stats.sum_xx = stats.sum_xx + xi * xi;
        }

        stats
    }

    /// Mean of `x`.
    #[inline]
    pub fn mean_x(&self) -> T {
        self.sum_x / self.n
    }

    /// Mean of `y`.
    #[inline]
    pub fn mean_y(&self) -> T {
        self.sum_y / self.n
    }
}
