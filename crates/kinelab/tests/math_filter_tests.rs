//! Tests for the exponential low-pass filter.
//!
//! ## Test Organization
//!
//! 1. **Update Rule** - Exact single-step behavior
//! 2. **Convergence** - Monotone approach to a constant input
//! 3. **State Management** - Reset behavior

use approx::assert_relative_eq;
use kinelab::prelude::*;

// ============================================================================
// Update Rule Tests
// ============================================================================

/// Test the state starts at zero.
#[test]
fn test_filter_starts_at_zero() {
    let filter = LowPass::<f64>::new(0.15);
    assert_eq!(filter.value(), 0.0);
    assert_eq!(filter.alpha(), 0.15);
}

/// Test a single update from the zero state.
///
/// `y' = α·x + (1−α)·0 = α·x`.
#[test]
fn test_filter_single_step() {
    let mut filter = LowPass::new(0.15);
    let out = filter.apply(100.0);
    assert_relative_eq!(out, 15.0, max_relative = 1e-12);
    assert_eq!(out, filter.value());
}

/// Test the blend of old and new state.
#[test]
fn test_filter_blends_state() {
    let mut filter = LowPass::new(0.25);
    filter.reset_to(40.0);
    let out = filter.apply(80.0);
    // 0.25·80 + 0.75·40 = 50
    assert_relative_eq!(out, 50.0, max_relative = 1e-12);
}

// ============================================================================
// Convergence Tests
// ============================================================================

/// Test monotone convergence to a constant input.
#[test]
fn test_filter_monotone_convergence() {
    let mut filter = LowPass::new(0.15);
    let target: f64 = 37.5;

    let mut last_err = target;
    for _ in 0..100 {
        let out = filter.apply(target);
        let err = (target - out).abs();
        assert!(err < last_err, "error should shrink every step");
        last_err = err;
    }
    assert_relative_eq!(filter.value(), target, max_relative = 1e-6);
}

/// Test convergence works for f32 state.
#[test]
fn test_filter_f32() {
    let mut filter = LowPass::<f32>::new(0.5);
    for _ in 0..50 {
        filter.apply(10.0);
    }
    assert_relative_eq!(filter.value(), 10.0, max_relative = 1e-4);
}

// ============================================================================
// State Management Tests
// ============================================================================

/// Test reset restores the zero state and the transient.
#[test]
fn test_filter_reset() {
    let mut filter = LowPass::new(0.15);
    for _ in 0..50 {
        filter.apply(90.0);
    }
    assert!(filter.value() > 80.0);

    filter.reset();
    assert_eq!(filter.value(), 0.0);

    let out = filter.apply(90.0);
    assert_relative_eq!(out, 13.5, max_relative = 1e-12);
}

/// Test reset_to seeds an arbitrary state.
#[test]
fn test_filter_reset_to() {
    let mut filter = LowPass::new(0.15);
    filter.reset_to(45.0);
    assert_eq!(filter.value(), 45.0);
}
