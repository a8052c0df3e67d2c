#![cfg(feature = "dev")]
//! Tests for the closed-form least-squares solver.
//!
//! ## Test Organization
//!
//! 1. **Exact Recovery** - Noise-free lines are recovered
//! 2. **Least Squares** - Agreement with the mean-centered textbook formula
//! 3. **Degenerate Input** - Zero-variance x yields non-finite coefficients

use approx::assert_abs_diff_eq;

use linreg_rs::internals::algorithms::analytical::AnalyticalSolver;
use linreg_rs::internals::algorithms::{FitMode, Solver};
use linreg_rs::internals::primitives::stats::SufficientStats;

fn solve(x: &[f64], y: &[f64]) -> (f64, f64) {
    let stats = SufficientStats::from_observations(x, y);
    AnalyticalSolver::coefficients(&stats).as_tuple()
}

// ============================================================================
// Exact Recovery
// ============================================================================

#[test]
fn test_recovers_exact_line() {
    let (a, b) = solve(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0]);

    assert_abs_diff_eq!(a, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b, 1.0, epsilon = 1e-9);
}

#[test]
fn test_recovers_negative_slope() {
    let x = [0.0, 1.0, 2.0, 5.0];
    let y: Vec<f64> = x.iter().map(|&xi| -3.0 * xi + 7.0).collect();

    let (a, b) = solve(&x, &y);

    assert_abs_diff_eq!(a, -3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b, 7.0, epsilon = 1e-9);
}

#[test]
fn test_two_points_define_line() {
    let (a, b) = solve(&[-1.0, 3.0], &[0.0, 2.0]);

    assert_abs_diff_eq!(a, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(b, 0.5, epsilon = 1e-12);
}

#[test]
fn test_unsorted_input() {
    let (a, b) = solve(&[4.0, 1.0, 3.0, 2.0], &[9.0, 3.0, 7.0, 5.0]);

    assert_abs_diff_eq!(a, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b, 1.0, epsilon = 1e-9);
}

// ============================================================================
// Least Squares
// ============================================================================

#[test]
fn test_noisy_data_known_solution() {
    // Sxy = 19.9, Sxx = 10, mean_y = 6.02
    let (a, b) = solve(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.1, 3.9, 6.2, 7.8, 10.1]);

    assert_abs_diff_eq!(a, 1.99, epsilon = 1e-10);
    assert_abs_diff_eq!(b, 0.05, epsilon = 1e-10);
}

#[test]
fn test_matches_mean_centered_formula() {
    let x: Vec<f64> = (0..25).map(|i| (i as f64 * 0.37).sin() * 4.0 + i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 0.8 * xi - 2.5 + (i as f64 * 1.3).cos())
        .collect();

    let n = x.len() as f64;
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let sxy: f64 = x.iter().zip(&y).map(|(&xi, &yi)| (xi - mx) * (yi - my)).sum();
    let sxx: f64 = x.iter().map(|&xi| (xi - mx) * (xi - mx)).sum();
    let expected_a = sxy / sxx;
    let expected_b = my - expected_a * mx;

    let (a, b) = solve(&x, &y);

    assert_abs_diff_eq!(a, expected_a, epsilon = 1e-9);
    assert_abs_diff_eq!(b, expected_b, epsilon = 1e-9);
}

#[test]
fn test_solver_trait_has_no_iteration_metadata() {
    let stats = SufficientStats::from_observations(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);

    let solution = AnalyticalSolver.solve(&stats).unwrap();
    assert!(solution.iterations.is_none());
    assert!(solution.gradient_norm.is_none());

    let via_mode = FitMode::Analytical.solve(&stats).unwrap();
    assert_eq!(solution, via_mode);
}

// ============================================================================
// Degenerate Input
// ============================================================================

#[test]
fn test_zero_variance_is_non_finite() {
    let (a, b) = solve(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]);

    assert!(!a.is_finite());
    assert!(!b.is_finite());
}

#[test]
fn test_single_point_is_non_finite() {
    let (a, _) = solve(&[2.0], &[7.0]);
    assert!(!a.is_finite());
}
