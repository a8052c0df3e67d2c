#![cfg(feature = "dev")]
//! Tests for sufficient statistics and the coefficient pair.

use approx::assert_relative_eq;

use linreg_rs::internals::primitives::coefficients::Coefficients;
use linreg_rs::internals::primitives::stats::SufficientStats;

// ============================================================================
// Sufficient Statistics
// ============================================================================

#[test]
fn test_stats_sums() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [3.0, 5.0, 7.0, 9.0];

    let stats = SufficientStats::from_observations(&x, &y);

    assert_eq!(stats.n, 4.0);
    assert_eq!(stats.sum_x, 10.0);
    assert_eq!(stats.sum_y, 24.0);
    assert_eq!(stats.sum_xy, 70.0);
    assert_eq!(stats.sum_xx, 30.0);
}

#[test]
fn test_stats_means() {
    let x = [2.0, 4.0, 6.0];
    let y = [1.0, 1.0, 4.0];

    let stats = SufficientStats::from_observations(&x, &y);

    assert_relative_eq!(stats.mean_x(), 4.0);
    assert_relative_eq!(stats.mean_y(), 2.0);
}

#[test]
fn test_stats_f32() {
    let x = [1.0f32, 2.0];
    let y = [0.5f32, 1.5];

    let stats = SufficientStats::from_observations(&x, &y);

    assert_eq!(stats.n, 2.0f32);
    assert_eq!(stats.sum_xy, 3.5f32);
}

#[test]
fn test_stats_empty_is_zero() {
    let stats = SufficientStats::<f64>::from_observations(&[], &[]);

    assert_eq!(stats.n, 0.0);
    assert_eq!(stats.sum_x, 0.0);
    assert_eq!(stats.sum_xx, 0.0);
}

#[test]
fn test_stats_ignores_unpaired_tail() {
    let stats = SufficientStats::from_observations(&[1.0, 2.0, 3.0], &[1.0, 1.0]);

    assert_eq!(stats.n, 2.0);
    assert_eq!(stats.sum_x, 3.0);
}

// ============================================================================
// Coefficients
// ============================================================================

#[test]
fn test_coefficients_apply() {
    let c = Coefficients::new(2.0, 1.0);

    assert_eq!(c.apply(0.0), 1.0);
    assert_eq!(c.apply(4.0), 9.0);
    assert_eq!(c.apply(-0.5), 0.0);
}

#[test]
fn test_coefficients_tuple_conversions() {
    let c: Coefficients<f64> = (3.0, -1.0).into();

    assert_eq!(c.slope, 3.0);
    assert_eq!(c.intercept, -1.0);
    assert_eq!(c.as_tuple(), (3.0, -1.0));
}

#[test]
fn test_coefficients_is_finite() {
    assert!(Coefficients::new(1.0, 2.0).is_finite());
    assert!(!Coefficients::new(f64::NAN, 2.0).is_finite());
    assert!(!Coefficients::new(1.0, f64::INFINITY).is_finite());
}
