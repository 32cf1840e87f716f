//! Tests for the motion sample type and lifecycle states.
//!
//! ## Test Organization
//!
//! 1. **Sample Helpers** - Magnitude and along-axis projection
//! 2. **Lifecycle** - Phase defaults and queries

use approx::assert_relative_eq;
use kinelab::prelude::*;

// ============================================================================
// Sample Helper Tests
// ============================================================================

/// Test gravity magnitude.
#[test]
fn test_gravity_magnitude() {
    let sample = MotionSample::new([3.0, 4.0, 0.0], [0.0, 0.0, 0.0], 1.0);
    assert_eq!(sample.gravity_magnitude(), 5.0);
}

/// Test the along-axis projection of user acceleration.
#[test]
fn test_user_accel_along_axis() {
    let sample = MotionSample::new([0.0, 1.0, 0.0], [0.1, -0.2, 0.3], 1.0);

    assert_relative_eq!(
        sample.user_accel_along(&[0.0, 1.0, 0.0]),
        -0.2,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        sample.user_accel_along(&[1.0, 0.0, 0.0]),
        0.1,
        max_relative = 1e-12
    );
}

/// Test samples compare by value.
#[test]
fn test_sample_equality() {
    let a = MotionSample::new([0.0, 1.0, 0.0], [0.0, 0.0, 0.0], 2.0);
    let b = MotionSample::new([0.0, 1.0, 0.0], [0.0, 0.0, 0.0], 2.0);
    assert_eq!(a, b);
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test the default phase is idle.
#[test]
fn test_phase_default_idle() {
    assert_eq!(Phase::default(), Phase::Idle);
    assert!(!Phase::Idle.is_running());
    assert!(Phase::Running.is_running());
}
