//! Error types for kinelab operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while feeding
//! sensor samples through the measurement components, including input
//! validation, parameter constraints, and buffer configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   magnitude or parameter).
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//! * **Trait Implementation**: Implements `Display` and
//!   `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Sensor conditions**: Degenerate gravity vectors that cannot be
//!    normalized are surfaced, never silently turned into NaN.
//! 2. **Parameter validation**: Invalid smoothing coefficient, sample
//!    rate, margin, threshold, or damping values.
//! 3. **Buffer constraints**: Queue capacity bounds.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use `f64` regardless of the working
//!   precision, for uniform reporting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kinelab operations.
#[derive(Debug, Clone, PartialEq)]
pub enum KinelabError {
    /// Gravity vector magnitude is too small to normalize; the update
    /// was skipped and previous outputs were retained.
    DegenerateGravity {
        /// Magnitude of the rejected vector.
        magnitude: f64,
    },

    /// Device mounting axis is too small to normalize.
    DegenerateAxis {
        /// Magnitude of the rejected axis.
        magnitude: f64,
    },

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Smoothing coefficient must be in the open interval (0, 1).
    InvalidAlpha(f64),

    /// Sample rate must be positive and finite.
    InvalidSampleRate(f64),

    /// Margin of error must be non-negative and finite.
    InvalidMargin(f64),

    /// Acceleration threshold must be non-negative and finite.
    InvalidThreshold(f64),

    /// Damping coefficient must be non-negative and finite.
    InvalidDamping(f64),

    /// Sample queue capacity must be large enough to hold at least one
    /// sample.
    InvalidQueueCapacity {
        /// The capacity provided.
        got: usize,
        /// Minimum required capacity.
        min: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KinelabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DegenerateGravity { magnitude } => {
                write!(f, "Degenerate gravity vector: magnitude {magnitude} cannot be normalized")
            }
            Self::DegenerateAxis { magnitude } => {
                write!(f, "Degenerate device axis: magnitude {magnitude} cannot be normalized")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha: {alpha} (must be > 0 and < 1)")
            }
            Self::InvalidSampleRate(rate) => {
                write!(f, "Invalid sample rate: {rate} Hz (must be positive and finite)")
            }
            Self::InvalidMargin(margin) => {
                write!(f, "Invalid margin: {margin} (must be >= 0 and finite)")
            }
            Self::InvalidThreshold(threshold) => {
                write!(f, "Invalid threshold: {threshold} (must be >= 0 and finite)")
            }
            Self::InvalidDamping(damping) => {
                write!(f, "Invalid damping: {damping} (must be >= 0 and finite)")
            }
            Self::InvalidQueueCapacity { got, min } => {
                write!(f, "Invalid queue capacity: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for KinelabError {}
