#![cfg(feature = "dev")]
//! Tests for goodness-of-fit diagnostics.

use approx::assert_relative_eq;

use linreg_rs::internals::evaluation::diagnostics::Diagnostics;
use linreg_rs::internals::primitives::coefficients::Coefficients;

const X: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
const Y: [f64; 4] = [3.0, 5.0, 7.0, 9.0];

#[test]
fn test_perfect_fit() {
    let d = Diagnostics::compute(&X, &Y, &Coefficients::new(2.0, 1.0));

    assert_eq!(d.sse, 0.0);
    assert_eq!(d.rmse, 0.0);
    assert_eq!(d.mae, 0.0);
    assert_eq!(d.r_squared, 1.0);
    assert_eq!(d.residual_sd, 0.0);
}

#[test]
fn test_known_residuals() {
    // Residuals of y = x are 2, 3, 4, 5; SST = 20
    let d = Diagnostics::compute(&X, &Y, &Coefficients::new(1.0, 0.0));

    assert_relative_eq!(d.sse, 54.0);
    assert_relative_eq!(d.rmse, 13.5f64.sqrt());
    assert_relative_eq!(d.mae, 3.5);
    assert_relative_eq!(d.r_squared, -1.7, epsilon = 1e-12);
    assert_relative_eq!(d.residual_sd, 27.0f64.sqrt());
}

#[test]
fn test_constant_response() {
    let x = [1.0, 2.0, 3.0];
    let y = [4.0, 4.0, 4.0];

    let exact = Diagnostics::compute(&x, &y, &Coefficients::new(0.0, 4.0));
    assert_eq!(exact.r_squared, 1.0);

    let off = Diagnostics::compute(&x, &y, &Coefficients::new(0.0, 5.0));
    assert_eq!(off.r_squared, 0.0);
    assert_relative_eq!(off.sse, 3.0);
}

#[test]
fn test_least_squares_r_squared_in_unit_interval() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.1, 3.9, 6.2, 7.8, 10.1];

    let d = Diagnostics::compute(&x, &y, &Coefficients::new(1.99, 0.05));

    assert!(d.r_squared > 0.99 && d.r_squared <= 1.0);
    assert!(d.rmse > 0.0);
}

#[test]
fn test_two_points_residual_sd_is_zero() {
    let d = Diagnostics::compute(&[0.0, 1.0], &[0.0, 3.0], &Coefficients::new(1.0, 0.0));
    assert_eq!(d.residual_sd, 0.0);
    assert_relative_eq!(d.sse, 4.0);
}

#[test]
fn test_empty_input() {
    let d = Diagnostics::<f64>::compute(&[], &[], &Coefficients::new(1.0, 0.0));
    assert_eq!(d.sse, 0.0);
    assert_eq!(d.r_squared, 0.0);
}

#[test]
fn test_display() {
    let d = Diagnostics::compute(&X, &Y, &Coefficients::new(1.0, 0.0));
    let text = format!("{}", d);

    assert!(text.contains("Linear Regression Diagnostics:"));
    assert!(text.contains("RMSE:"));
    assert!(text.contains("R^2:"));
}
