//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the objective shared by both fitting strategies:
//! - Squared-error loss
//! - Its gradient with respect to slope and intercept
//!
//! These are pure mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Squared-error objective and gradient.
pub mod loss;
