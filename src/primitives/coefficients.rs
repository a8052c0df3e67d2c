//! Fitted line coefficients.

// External dependencies
use num_traits::Float;

/// Slope and intercept of the line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<T> {
    /// Slope `a`.
    pub slope: T,

    /// Intercept `b`.
    pub intercept: T,
}

impl<T: Float> Coefficients<T> {
    /// Create a coefficient pair.
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line at `x`.
    ///
    /// Computed as `slope * x + intercept` without fused multiply-add so the
    /// result matches the textbook expression bit for bit.
    #[inline]
    pub fn apply(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Whether both coefficients are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }

    /// The pair as `(slope, intercept)`.
    #[inline]
    pub fn as_tuple(&self) -> (T, T) {
        (self.slope, self.intercept)
    }
}

impl<T> From<(T, T)> for Coefficients<T> {
    fn from((slope, intercept): (T, T)) -> Self {
        Self { slope, intercept }
    }
}
