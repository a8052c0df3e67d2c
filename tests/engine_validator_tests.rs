#![cfg(feature = "dev")]
//! Tests for configuration and input validation.

use linreg_rs::internals::algorithms::FitMode;
use linreg_rs::internals::algorithms::gradient_descent::GradientDescent;
use linreg_rs::internals::engine::validator::Validator;
use linreg_rs::internals::primitives::errors::LinregError;

// ============================================================================
// Input Shape
// ============================================================================

#[test]
fn test_validate_inputs_ok() {
    assert!(Validator::validate_inputs(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
    // A single observation is structurally valid
    assert!(Validator::validate_inputs(&[1.0], &[3.0]).is_ok());
}

#[test]
fn test_validate_inputs_empty() {
    assert_eq!(
        Validator::validate_inputs::<f64>(&[], &[]),
        Err(LinregError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_inputs(&[1.0], &[]),
        Err(LinregError::EmptyInput)
    );
}

#[test]
fn test_validate_inputs_mismatched() {
    assert_eq!(
        Validator::validate_inputs(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(LinregError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
}

#[test]
fn test_validate_inputs_does_not_inspect_values() {
    assert!(Validator::validate_inputs(&[f64::NAN, 1.0], &[f64::INFINITY, 2.0]).is_ok());
}

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn test_require() {
    assert_eq!(Validator::require(Some(0.1), "learning_rate"), Ok(0.1));
    assert_eq!(
        Validator::require::<f64>(None, "tolerance"),
        Err(LinregError::MissingParameter {
            parameter: "tolerance"
        })
    );
}

#[test]
fn test_validate_learning_rate() {
    assert!(Validator::validate_learning_rate(0.01).is_ok());
    assert_eq!(
        Validator::validate_learning_rate(0.0),
        Err(LinregError::InvalidLearningRate(0.0))
    );
    assert_eq!(
        Validator::validate_learning_rate(-1.0),
        Err(LinregError::InvalidLearningRate(-1.0))
    );
    assert!(Validator::validate_learning_rate(f64::INFINITY).is_err());
    assert!(Validator::validate_learning_rate(f64::NAN).is_err());
}

#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(1e-6).is_ok());
    assert_eq!(
        Validator::validate_tolerance(0.0),
        Err(LinregError::InvalidTolerance(0.0))
    );
    assert!(Validator::validate_tolerance(f64::NAN).is_err());
}

#[test]
fn test_validate_max_iterations() {
    assert!(Validator::validate_max_iterations(1).is_ok());
    assert_eq!(
        Validator::validate_max_iterations(0),
        Err(LinregError::InvalidMaxIterations(0))
    );
}

#[test]
fn test_validate_mode() {
    assert!(Validator::validate_mode::<f64>(&FitMode::Analytical).is_ok());

    let ok = FitMode::GradientDescent(GradientDescent::new(0.01, 1e-6));
    assert!(Validator::validate_mode(&ok).is_ok());

    let bad_lr = FitMode::GradientDescent(GradientDescent::new(-0.01, 1e-6));
    assert_eq!(
        Validator::validate_mode(&bad_lr),
        Err(LinregError::InvalidLearningRate(-0.01))
    );

    let bad_cap = FitMode::GradientDescent(GradientDescent::new(0.01, 1e-6).with_max_iterations(0));
    assert_eq!(
        Validator::validate_mode(&bad_cap),
        Err(LinregError::InvalidMaxIterations(0))
    );
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("tolerance")),
        Err(LinregError::DuplicateParameter {
            parameter: "tolerance"
        })
    );
}
