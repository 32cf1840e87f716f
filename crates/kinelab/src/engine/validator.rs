//! Input validation for kinelab configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for component
//! configuration parameters and per-sample numeric inputs. It checks
//! requirements such as finite values and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like alpha in (0, 1).
//! * **Finite Checks**: Ensures inputs are finite (no NaN/Inf) before
//!   they can reach integrator or filter state.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid inputs.
//! * This module does not perform the filtering or integration itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KinelabError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kinelab configuration and input data.
///
/// Provides static methods for validating parameters and samples. All
/// methods return `Result<(), KinelabError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), KinelabError> {
        if !val.is_finite() {
            return Err(KinelabError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that every component of a 3-vector is finite.
    pub fn validate_vector<T: Float>(v: &[T; 3], name: &str) -> Result<(), KinelabError> {
        for (i, &c) in v.iter().enumerate() {
            if !c.is_finite() {
                return Err(KinelabError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    c.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the low-pass smoothing coefficient.
    pub fn validate_alpha<T: Float>(alpha: T) -> Result<(), KinelabError> {
        if !alpha.is_finite() || alpha <= T::zero() || alpha >= T::one() {
            return Err(KinelabError::InvalidAlpha(
                alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a sample rate in Hz.
    pub fn validate_sample_rate<T: Float>(rate: T) -> Result<(), KinelabError> {
        if !rate.is_finite() || rate <= T::zero() {
            return Err(KinelabError::InvalidSampleRate(
                rate.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a margin of error in degrees.
    pub fn validate_margin<T: Float>(margin: T) -> Result<(), KinelabError> {
        if !margin.is_finite() || margin < T::zero() {
            return Err(KinelabError::InvalidMargin(
                margin.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate an acceleration or speed threshold.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), KinelabError> {
        if !threshold.is_finite() || threshold < T::zero() {
            return Err(KinelabError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a damping coefficient.
    pub fn validate_damping<T: Float>(damping: T) -> Result<(), KinelabError> {
        if !damping.is_finite() || damping < T::zero() {
            return Err(KinelabError::InvalidDamping(
                damping.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), KinelabError> {
        if let Some(param) = duplicate_param {
            return Err(KinelabError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
