//! Velocity/displacement integration of along-track acceleration.
//!
//! ## Purpose
//!
//! This module integrates the along-track component of user
//! acceleration twice to recover a cart's velocity and displacement,
//! accumulating one distance split per sample. The result is the
//! time-distance trace a kinematics experiment is after.
//!
//! ## Design notes
//!
//! * **Owned state**: All accumulator fields live in one state struct
//!   mutated exclusively by `on_sample`; sample delivery must be
//!   serialized, because the trapezoidal recurrence depends on the
//!   immediately preceding velocity and acceleration.
//! * **Drift suppression**: Near-zero accelerations are nudged against
//!   the current velocity so a stationary device bleeds off integration
//!   drift instead of creeping.
//! * **Zero-velocity snap**: On `stop()`, a small residual velocity is
//!   snapped to zero and one synthetic terminal split is appended,
//!   the only point where `time_elapsed` may repeat.
//! * **Continuation**: `start()` after `stop()` resumes the same
//!   session; only `reset()` clears the trace and the time origin.
//!
//! ## Invariants
//!
//! * Velocity and displacement only change while running.
//! * Every accepted sample appends exactly one split.
//! * `time_elapsed` is non-decreasing across the split sequence except
//!   for at most one trailing duplicate from the snap.
//!
//! ## Non-goals
//!
//! * 3-D trajectory reconstruction; only the one mounting axis is
//!   integrated.
//! * Persistence of the trace beyond the session; `reset()` is the
//!   only history boundary.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::{splits_to_csv, DistanceSplit};
use crate::engine::validator::Validator;
use crate::primitives::errors::KinelabError;
use crate::primitives::sample::Phase;

// ============================================================================
// Constants
// ============================================================================

/// Standard gravity in m/s², used to convert g units.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Default sample rate of the driving source, Hz.
const DEFAULT_SAMPLE_RATE_HZ: f64 = 10.0;

/// Default threshold below which acceleration is treated as noise, m/s².
const DEFAULT_TINY_ACCEL_THRESHOLD: f64 = 0.03;

/// Default damping applied against velocity when acceleration is tiny.
const DEFAULT_SMALL_ACCEL_DAMPING: f64 = 0.02;

/// Default residual speed below which `stop()` snaps velocity to zero, m/s.
const DEFAULT_SNAP_SPEED_THRESHOLD: f64 = 0.2;

/// Floor for the time step in the damping term, seconds.
const DT_FLOOR: f64 = 1e-3;

// ============================================================================
// Integrator Builder
// ============================================================================

/// Builder for [`KinematicsIntegrator`].
#[derive(Debug, Clone)]
pub struct KinematicsIntegratorBuilder<T> {
    /// Sample rate of the driving source, Hz.
    sample_rate_hz: Option<T>,

    /// Acceleration magnitude treated as near-zero, m/s².
    tiny_accel_threshold: Option<T>,

    /// Damping coefficient pulling velocity toward zero when still.
    small_accel_damping: Option<T>,

    /// Residual speed below which `stop()` snaps velocity to zero, m/s.
    snap_speed_threshold: Option<T>,

    /// Whether `stop()` applies the zero-velocity snap at all.
    zero_velocity_snap: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KinematicsIntegratorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KinematicsIntegratorBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            sample_rate_hz: None,
            tiny_accel_threshold: None,
            small_accel_damping: None,
            snap_speed_threshold: None,
            zero_velocity_snap: None,
            duplicate_param: None,
        }
    }

    /// Set the sample rate of the driving source.
    pub fn sample_rate_hz(mut self, rate: T) -> Self {
        if self.sample_rate_hz.is_some() {
            self.duplicate_param = Some("sample_rate_hz");
        }
        self.sample_rate_hz = Some(rate);
        self
    }

    /// Set the near-zero acceleration threshold.
    pub fn tiny_accel_threshold(mut self, threshold: T) -> Self {
        if self.tiny_accel_threshold.is_some() {
            self.duplicate_param = Some("tiny_accel_threshold");
        }
        self.tiny_accel_threshold = Some(threshold);
        self
    }

    /// Set the small-acceleration damping coefficient.
    pub fn small_accel_damping(mut self, damping: T) -> Self {
        if self.small_accel_damping.is_some() {
            self.duplicate_param = Some("small_accel_damping");
        }
        self.small_accel_damping = Some(damping);
        self
    }

    /// Set the residual speed threshold for the zero-velocity snap.
    pub fn snap_speed_threshold(mut self, threshold: T) -> Self {
        if self.snap_speed_threshold.is_some() {
            self.duplicate_param = Some("snap_speed_threshold");
        }
        self.snap_speed_threshold = Some(threshold);
        self
    }

    /// Enable or disable the zero-velocity snap on `stop()`.
    pub fn zero_velocity_snap(mut self, enabled: bool) -> Self {
        if self.zero_velocity_snap.is_some() {
            self.duplicate_param = Some("zero_velocity_snap");
        }
        self.zero_velocity_snap = Some(enabled);
        self
    }

    /// Build the integrator.
    pub fn build(self) -> Result<KinematicsIntegrator<T>, KinelabError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let rate = self
            .sample_rate_hz
            .unwrap_or_else(|| T::from(DEFAULT_SAMPLE_RATE_HZ).unwrap());
        Validator::validate_sample_rate(rate)?;

        let tiny = self
            .tiny_accel_threshold
            .unwrap_or_else(|| T::from(DEFAULT_TINY_ACCEL_THRESHOLD).unwrap());
        Validator::validate_threshold(tiny)?;

        let damping = self
            .small_accel_damping
            .unwrap_or_else(|| T::from(DEFAULT_SMALL_ACCEL_DAMPING).unwrap());
        Validator::validate_damping(damping)?;

        let snap = self
            .snap_speed_threshold
            .unwrap_or_else(|| T::from(DEFAULT_SNAP_SPEED_THRESHOLD).unwrap());
        Validator::validate_threshold(snap)?;

        Ok(KinematicsIntegrator {
            sample_rate_hz: rate,
            tiny_accel_threshold: tiny,
            small_accel_damping: damping,
            snap_speed_threshold: snap,
            zero_velocity_snap: self.zero_velocity_snap.unwrap_or(true),
            state: IntegratorState::zeroed(),
            splits: Vec::new(),
            phase: Phase::Idle,
        })
    }
}

// ============================================================================
// Integrator State
// ============================================================================

/// Accumulator state of the integrator.
///
/// Owned exclusively by [`KinematicsIntegrator`] and mutated only in
/// its sample handler.
#[derive(Debug, Clone, Copy)]
struct IntegratorState<T> {
    /// Timestamp of the first sample; zero means unset.
    t0: T,
    /// Timestamp of the most recent sample.
    last_t: T,
    /// Current velocity, m/s.
    velocity: T,
    /// Current displacement, m.
    displacement: T,
    /// Acceleration committed at the previous sample, m/s².
    last_accel: T,
}

impl<T: Float> IntegratorState<T> {
    fn zeroed() -> Self {
        Self {
            t0: T::zero(),
            last_t: T::zero(),
            velocity: T::zero(),
            displacement: T::zero(),
            last_accel: T::zero(),
        }
    }
}

// ============================================================================
// Kinematics Integrator
// ============================================================================

/// Along-track velocity/displacement integrator accumulating a split
/// trace.
#[derive(Debug, Clone)]
pub struct KinematicsIntegrator<T> {
    sample_rate_hz: T,
    tiny_accel_threshold: T,
    small_accel_damping: T,
    snap_speed_threshold: T,
    zero_velocity_snap: bool,

    state: IntegratorState<T>,
    splits: Vec<DistanceSplit<T>>,
    phase: Phase,
}

impl<T: Float> KinematicsIntegrator<T> {
    /// Start a builder with default settings.
    pub fn builder() -> KinematicsIntegratorBuilder<T> {
        KinematicsIntegratorBuilder::new()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Force idle, discard the split trace, and zero all accumulators.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.splits.clear();
        self.state = IntegratorState::zeroed();
    }

    /// Begin accepting samples. No-op if already running.
    ///
    /// Accumulated state is kept: a stopped measurement can be resumed.
    /// Use [`reset`](Self::reset) to begin a fresh session.
    pub fn start(&mut self) {
        self.phase = Phase::Running;
    }

    /// Stop accepting samples. No-op if already idle.
    ///
    /// When the zero-velocity snap is enabled and the residual speed is
    /// below the snap threshold, velocity is forced to zero and one
    /// synthetic terminal split is appended, reusing the last
    /// `time_elapsed` and `displacement` with zero acceleration. That
    /// split is returned.
    pub fn stop(&mut self) -> Option<DistanceSplit<T>> {
        if !self.phase.is_running() {
            return None;
        }
        self.phase = Phase::Idle;

        if !self.zero_velocity_snap {
            return None;
        }
        let last = *self.splits.last()?;
        if self.state.velocity.abs() >= self.snap_speed_threshold {
            return None;
        }

        self.state.velocity = T::zero();
        let terminal = DistanceSplit {
            time_elapsed: last.time_elapsed,
            displacement: self.state.displacement,
            acceleration: T::zero(),
        };
        self.splits.push(terminal);
        Some(terminal)
    }

    /// Whether the integrator is accepting samples.
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    // ========================================================================
    // Sample Processing
    // ========================================================================

    /// Feed one along-track user-acceleration sample.
    ///
    /// `user_accel_g` is the acceleration component along the mounting
    /// axis in g units (gravity already removed); `timestamp` is in
    /// monotonic seconds. Returns `Ok(None)` while idle and
    /// `Ok(Some(split))` with the freshly appended split otherwise.
    /// Non-finite input yields an error before any state changes.
    pub fn on_sample(
        &mut self,
        user_accel_g: T,
        timestamp: T,
    ) -> Result<Option<DistanceSplit<T>>, KinelabError> {
        if !self.phase.is_running() {
            return Ok(None);
        }

        Validator::validate_scalar(user_accel_g, "user_accel_g")?;
        Validator::validate_scalar(timestamp, "timestamp")?;

        if self.state.t0 == T::zero() {
            self.state.t0 = timestamp;
            self.state.last_t = timestamp;
        }

        // Along-track acceleration in m/s²; positive points down-track.
        let g0 = T::from(STANDARD_GRAVITY).unwrap();
        let a_y = -user_accel_g * g0;

        // Non-monotonic timestamps contribute nothing to the integral.
        let dt = (timestamp - self.state.last_t).max(T::zero());

        // Light bias control to curb drift when nearly still.
        let a = if a_y.abs() < self.tiny_accel_threshold {
            let dt_floor = T::from(DT_FLOOR).unwrap();
            a_y - self.small_accel_damping * self.state.velocity / dt.max(dt_floor)
        } else {
            a_y
        };

        // Integrate a -> v (trapezoid), then v -> s.
        let half = T::from(0.5).unwrap();
        let v_new = self.state.velocity + half * (self.state.last_accel + a) * dt;
        let s_new = self.state.displacement + half * (self.state.velocity + v_new) * dt;

        self.state.velocity = v_new;
        self.state.displacement = s_new;
        self.state.last_accel = a;
        self.state.last_t = timestamp;

        let split = DistanceSplit {
            time_elapsed: timestamp - self.state.t0,
            displacement: s_new,
            acceleration: a,
        };
        self.splits.push(split);
        Ok(Some(split))
    }

    // ========================================================================
    // Readouts
    // ========================================================================

    /// Seconds elapsed since the first sample; zero before any sample.
    pub fn elapsed(&self) -> T {
        if self.state.last_t == T::zero() {
            T::zero()
        } else {
            self.state.last_t - self.state.t0
        }
    }

    /// Current displacement along the track, m.
    pub fn distance(&self) -> T {
        self.state.displacement
    }

    /// Current velocity along the track, m/s.
    pub fn velocity(&self) -> T {
        self.state.velocity
    }

    /// The ordered split trace accumulated so far.
    pub fn splits(&self) -> &[DistanceSplit<T>] {
        &self.splits
    }

    /// Nominal spacing between samples from the driving source, in
    /// seconds.
    pub fn sample_interval(&self) -> T {
        self.sample_rate_hz.recip()
    }

    /// Render the split trace as CSV.
    pub fn export_csv(&self) -> String {
        splits_to_csv(&self.splits)
    }
}
