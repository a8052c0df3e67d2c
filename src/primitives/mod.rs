//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the shared error type and the sufficient statistics
//! both solvers are computed from. It has zero internal dependencies within
//! the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine (estimator, output, validator)
//!   ↓
//! Layer 4: Evaluation (diagnostics)
//!   ↓
//! Layer 3: Algorithms (analytical, gradient descent)
//!   ↓
//! Layer 2: Math (loss, gradient)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `LinregError` enum
/// - Configuration, input, fitting and state variants
pub mod errors;

/// Sufficient statistics (n, Σx, Σy, Σxy, Σx²).
pub mod stats;

/// Fitted slope/intercept pair.
pub mod coefficients;
