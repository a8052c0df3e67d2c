//! Layer 4: Evaluation
//!
//! Post-fit diagnostics.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit metrics (SSE, RMSE, MAE, R², residual SD).
pub mod diagnostics;
