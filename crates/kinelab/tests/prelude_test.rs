//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for a
//! complete measurement workflow: both components, their builders, the
//! sample/queue types, the margin utilities, and the error type.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Complete Workflow** - A full leveling + measurement session

use kinelab::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the component builders are usable from the prelude.
#[test]
fn test_prelude_builders() {
    let _ = AngleEstimatorBuilder::<f64>::new().build().unwrap();
    let _ = KinematicsIntegratorBuilder::<f64>::new().build().unwrap();
    let _ = AngleEstimator::<f64>::builder();
    let _ = KinematicsIntegrator::<f64>::builder();
}

/// Test that the support types are usable from the prelude.
#[test]
fn test_prelude_support_types() {
    let _ = MotionSample::new([0.0, 1.0, 0.0], [0.0, 0.0, 0.0], 0.0);
    let _ = SampleQueue::<f64>::with_capacity(16).unwrap();
    let _ = LowPass::<f64>::new(0.15);
    let _ = MarginPreset::default();
    assert!(within_margin(1.0, 1.0, 0.0));
    assert_eq!(Phase::default(), Phase::Idle);
}

// ============================================================================
// Complete Workflow Tests
// ============================================================================

/// Test a full session: level the track, then record a run.
///
/// A motion source pushes samples through the bounded queue; the
/// consumer drains it into the two components in sequence.
#[test]
fn test_prelude_complete_workflow() -> Result<(), KinelabError> {
    // Phase 1: leveling. The device lies at a slight incline.
    let mut angle = AngleEstimatorBuilder::new()
        .alpha(0.15)
        .sample_rate_hz(60.0)
        .build()?;
    angle.start();

    let phi = 80.0f64.to_radians(); // 10° above horizontal
    let gravity = [phi.sin(), phi.cos(), 0.0];
    for _ in 0..400 {
        angle.on_sample(gravity)?;
    }
    angle.stop();

    assert!(angle.is_within_margin(10.0, MarginPreset::PointTwoFive.value()));

    // Phase 2: measurement. Samples flow through the bounded queue.
    let mut queue = SampleQueue::with_capacity(64)?;
    let accel_g = -0.5 / 9.80665; // 0.5 m/s² down-track
    for k in 0..40 {
        queue.push(MotionSample::new(
            gravity,
            [0.0, accel_g, 0.0],
            200.0 + k as f64 * 0.1,
        ));
    }

    let mut cart = KinematicsIntegratorBuilder::new().sample_rate_hz(10.0).build()?;
    cart.start();
    let axis = [0.0, 1.0, 0.0];
    while let Some(sample) = queue.pop() {
        cart.on_sample(sample.user_accel_along(&axis), sample.timestamp)?;
    }
    cart.stop();

    assert_eq!(cart.splits().len(), 40);
    assert!(cart.distance() > 0.0);
    assert!(cart.export_csv().starts_with("time_s,distance_m\n"));
    Ok(())
}
