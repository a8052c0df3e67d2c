//! Layer 5: Engine
//!
//! Orchestration of fitting and prediction.
//!
//! # Module Organization
//!
//! - **estimator**: `LinearRegressor`, fit/predict dispatch and fitted state
//! - **output**: `FitReport` returned by `fit`
//! - **validator**: Configuration and input validation
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Estimator with configuration and fitted state.
pub mod estimator;

/// Fit report.
pub mod output;

/// Configuration and input validation.
pub mod validator;
