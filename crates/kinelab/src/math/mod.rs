//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions with no component
//! state: 3-vector helpers, the exponential low-pass filter, and the
//! margin-of-error utilities. Everything here is deterministic and
//! allocation-free.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// 3-component vector helpers.
pub mod vector;

/// Exponential low-pass filtering.
pub mod filter;

/// Margin-of-error comparison utilities.
pub mod margin;
