//! # linreg-rs: Simple Linear Regression for Rust
//!
//! Fits a straight line `y = a·x + b` to paired observations by minimizing
//! squared error, using either a closed-form solution or batch gradient
//! descent. Both strategies converge to the same optimum on well-conditioned
//! input.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0];
//! let y = vec![3.0, 5.0, 7.0, 9.0];
//!
//! // Closed-form least squares (the default method)
//! let mut model = LinearRegression::<f64>::new().build()?;
//!
//! let report = model.fit(&x, &y)?;
//! println!("{}", report);
//!
//! assert_eq!(report.slope(), 2.0);
//! assert_eq!(report.intercept(), 1.0);
//! assert_eq!(model.predict(5.0)?, 11.0);
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 4
//!   Method: Analytical
//!
//! Coefficients:
//!   Slope:     2.000000
//!   Intercept: 1.000000
//!   Loss:      0.000000
//! ```
//!
//! ### Gradient Descent
//!
//! Iterative fitting requires a learning rate and a convergence tolerance.
//! The learning rate must suit the scale of the data.
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0];
//! let y = vec![3.0, 5.0, 7.0, 9.0];
//!
//! let mut model = LinearRegression::<f64>::new()
//!     .method(Iterative)
//!     .learning_rate(0.01)     // Step size
//!     .tolerance(1e-6)         // Stop when |gradient| < tolerance
//!     .return_diagnostics()    // RMSE, MAE, R^2
//!     .build()?;
//!
//! let report = model.fit(&x, &y)?;
//! assert!((report.slope() - 2.0).abs() < 1e-3);
//! assert!((report.intercept() - 1.0).abs() < 1e-3);
//! assert!(report.iterations_used.is_some());
//!
//! let predictions = model.predict_many(&[5.0, 6.0])?;
//! assert_eq!(predictions.len(), 2);
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, LinregError>`:
//!
//! ```rust
//! use linreg_rs::prelude::*;
//!
//! // Iterative fitting without hyperparameters is a configuration error
//! let err = LinearRegression::<f64>::new().method(Iterative).build().unwrap_err();
//! assert_eq!(err, LinregError::MissingParameter { parameter: "learning_rate" });
//!
//! // Predicting before fitting is a state error
//! let model = LinearRegression::<f64>::new().build()?;
//! assert_eq!(model.predict(1.0), Err(LinregError::NotFitted));
//! # Result::<(), LinregError>::Ok(())
//! ```
//!
//! ## Degenerate Input
//!
//! If all `x` values are equal the closed-form slope divides by zero. By
//! default the non-finite coefficients are stored and returned; opt into
//! `DegeneratePolicy::Reject` to get [`LinregError::DegenerateInput`]
//! instead.
//!
//! ## Logging
//!
//! Fitting emits `tracing` events (`debug` per fit, `trace` per gradient
//! step). Install any `tracing` subscriber in the application to see them.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! linreg-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - **`std`** (default): standard library support.
//! - **`serde`**: `Serialize`/`Deserialize` for configuration types.
//! - **`dev`**: exposes internal modules for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the shared error type, the coefficient pair and the
// sufficient statistics both solvers consume.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the squared-error objective and its gradient.
mod math;

// Layer 3: Algorithms - core fitting algorithms.
//
// Contains the closed-form solver, gradient descent and the
// `FitMode` configuration that selects between them.
mod algorithms;

// Layer 4: Evaluation - post-processing and diagnostics.
//
// Contains goodness-of-fit metrics (RMSE, MAE, R^2).
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains the estimator, validation and the fit report.
mod engine;

// Layer 6: API - high-level fluent builder.
//
// Provides the `LinearRegression` builder.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use linreg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::gradient_descent::GradientDescent;
    pub use crate::api::{
        Coefficients, DegeneratePolicy,
        DegeneratePolicy::{Propagate, Reject},
        DescentStep, DescentSteps, Diagnostics,
        FitMethod::{self, Analytical, Iterative},
        FitMode, FitReport, Gradient, LinearRegressionBuilder as LinearRegression,
        LinearRegressor, LinregError, SufficientStats,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
