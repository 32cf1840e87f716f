//! Inclination angle estimation from the gravity direction.
//!
//! ## Purpose
//!
//! This module estimates the inclination of a device mounted along a
//! track. Each gravity sample yields the angle between gravity and the
//! device mounting axis; an exponential low-pass filter stabilizes the
//! reading, and an acute fold maps it into the `[0, 90]` range shown
//! to users.
//!
//! ## Design notes
//!
//! * **Raw + acute**: The filtered raw angle spans `[0, 180]` and
//!   preserves which side of horizontal the device is on; the acute
//!   angle `min(raw, 180 − raw)` is what a level display shows. The
//!   consumer pairs `raw > 90` with a separately obtained orientation
//!   signal to resolve left/right of vertical.
//! * **Degenerate input**: A near-zero gravity vector cannot be
//!   normalized; the update is skipped and surfaced as an error rather
//!   than letting NaN reach published state.
//! * **Filter persistence**: By default the filter state survives
//!   `start()`/`stop()` cycles, so the zero-initialized convergence
//!   transient happens once per estimator lifetime. Builders may opt
//!   into a per-session reset instead.
//!
//! ## Invariants
//!
//! * `0 ≤ raw_angle ≤ 180` and `current_angle = min(raw_angle, 180 − raw_angle)`.
//! * Published angles only change while the estimator is running.
//!
//! ## Non-goals
//!
//! * Full 3-D orientation estimation; only the one mounting axis is
//!   resolved.
//! * A signed angle output; the sign convention belongs to the
//!   consumer's orientation pairing.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::filter::LowPass;
use crate::math::margin::within_margin;
use crate::math::vector;
use crate::primitives::errors::KinelabError;
use crate::primitives::sample::Phase;

// ============================================================================
// Angle Estimator Builder
// ============================================================================

/// Builder for [`AngleEstimator`].
#[derive(Debug, Clone)]
pub struct AngleEstimatorBuilder<T> {
    /// Low-pass smoothing coefficient (0, 1).
    alpha: Option<T>,

    /// Nominal update rate of the driving source, Hz.
    sample_rate_hz: Option<T>,

    /// Mounting axis of the device in the device frame.
    device_axis: Option<[T; 3]>,

    /// Re-zero the filter state on every `start()`.
    reset_filter_on_start: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for AngleEstimatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> AngleEstimatorBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            alpha: None,
            sample_rate_hz: None,
            device_axis: None,
            reset_filter_on_start: None,
            duplicate_param: None,
        }
    }

    /// Set the low-pass smoothing coefficient.
    pub fn alpha(mut self, alpha: T) -> Self {
        if self.alpha.is_some() {
            self.duplicate_param = Some("alpha");
        }
        self.alpha = Some(alpha);
        self
    }

    /// Set the nominal update rate of the driving source.
    pub fn sample_rate_hz(mut self, rate: T) -> Self {
        if self.sample_rate_hz.is_some() {
            self.duplicate_param = Some("sample_rate_hz");
        }
        self.sample_rate_hz = Some(rate);
        self
    }

    /// Set the device mounting axis (normalized at build time).
    pub fn device_axis(mut self, axis: [T; 3]) -> Self {
        if self.device_axis.is_some() {
            self.duplicate_param = Some("device_axis");
        }
        self.device_axis = Some(axis);
        self
    }

    /// Re-zero the filter state on every `start()`, restoring the
    /// convergence transient per session.
    pub fn reset_filter_on_start(mut self, enabled: bool) -> Self {
        if self.reset_filter_on_start.is_some() {
            self.duplicate_param = Some("reset_filter_on_start");
        }
        self.reset_filter_on_start = Some(enabled);
        self
    }

    /// Build the estimator.
    pub fn build(self) -> Result<AngleEstimator<T>, KinelabError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let alpha = self.alpha.unwrap_or_else(|| T::from(DEFAULT_ALPHA).unwrap());
        Validator::validate_alpha(alpha)?;

        let rate = self
            .sample_rate_hz
            .unwrap_or_else(|| T::from(DEFAULT_SAMPLE_RATE_HZ).unwrap());
        Validator::validate_sample_rate(rate)?;

        let axis = self
            .device_axis
            .unwrap_or([T::zero(), T::one(), T::zero()]);
        Validator::validate_vector(&axis, "device_axis")?;
        let axis = vector::normalize(&axis).ok_or_else(|| KinelabError::DegenerateAxis {
            magnitude: vector::magnitude(&axis).to_f64().unwrap_or(f64::NAN),
        })?;

        Ok(AngleEstimator {
            sample_rate_hz: rate,
            device_axis: axis,
            reset_filter_on_start: self.reset_filter_on_start.unwrap_or(false),
            lp: LowPass::new(alpha),
            raw_angle: T::zero(),
            current_angle: T::zero(),
            phase: Phase::Idle,
        })
    }
}

// ============================================================================
// Angle Snapshot
// ============================================================================

/// Result of a single angle update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSnapshot<T> {
    /// Filtered raw angle in degrees, `[0, 180]`.
    pub raw: T,

    /// Acute mirror of `raw` in degrees, `[0, 90]`.
    pub acute: T,
}

// ============================================================================
// Angle Estimator
// ============================================================================

/// Default smoothing coefficient.
const DEFAULT_ALPHA: f64 = 0.15;

/// Default update rate of the driving source, Hz.
const DEFAULT_SAMPLE_RATE_HZ: f64 = 60.0;

/// Inclination estimator fed by gravity-direction samples.
#[derive(Debug, Clone)]
pub struct AngleEstimator<T> {
    sample_rate_hz: T,
    device_axis: [T; 3],
    reset_filter_on_start: bool,

    lp: LowPass<T>,
    raw_angle: T,
    current_angle: T,
    phase: Phase,
}

impl<T: Float> AngleEstimator<T> {
    /// Start a builder with default settings.
    pub fn builder() -> AngleEstimatorBuilder<T> {
        AngleEstimatorBuilder::new()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Begin accepting samples. No-op if already running.
    pub fn start(&mut self) {
        if self.phase.is_running() {
            return;
        }
        if self.reset_filter_on_start {
            self.lp.reset();
        }
        self.phase = Phase::Running;
    }

    /// Stop accepting samples, retaining the last published angles.
    /// No-op if already idle.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Whether the estimator is accepting samples.
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    // ========================================================================
    // Sample Processing
    // ========================================================================

    /// Feed one gravity-direction sample.
    ///
    /// Returns `Ok(None)` while idle (the sample is not consumed) and
    /// `Ok(Some(snapshot))` with the freshly published angles
    /// otherwise. A degenerate or non-finite gravity vector yields an
    /// error and leaves the published angles untouched.
    pub fn on_sample(&mut self, gravity: [T; 3]) -> Result<Option<AngleSnapshot<T>>, KinelabError> {
        if !self.phase.is_running() {
            return Ok(None);
        }

        Validator::validate_vector(&gravity, "gravity")?;
        let g_hat = vector::normalize(&gravity).ok_or_else(|| KinelabError::DegenerateGravity {
            magnitude: vector::magnitude(&gravity).to_f64().unwrap_or(f64::NAN),
        })?;

        // Angle between gravity (vertical) and the mounting axis.
        let cos_phi = vector::dot(&g_hat, &self.device_axis)
            .max(-T::one())
            .min(T::one());
        let phi = cos_phi.acos(); // radians, 0..π

        // Signed angle in degrees (−90..+90), then folded to 0..180 so
        // the side of horizontal survives the fold (e.g. −10° → 170°).
        let quarter = T::from(90.0).unwrap();
        let half = T::from(180.0).unwrap();
        let signed_deg = quarter - phi.to_degrees();
        let raw_deg = if signed_deg >= T::zero() {
            signed_deg
        } else {
            half + signed_deg
        };

        let filtered = self.lp.apply(raw_deg);
        let acute = filtered.min(half - filtered);

        self.raw_angle = filtered;
        self.current_angle = acute;

        Ok(Some(AngleSnapshot {
            raw: filtered,
            acute,
        }))
    }

    // ========================================================================
    // Readouts
    // ========================================================================

    /// Filtered raw angle in degrees, `[0, 180]`.
    pub fn raw_angle(&self) -> T {
        self.raw_angle
    }

    /// Acute inclination angle in degrees, `[0, 90]`.
    pub fn current_angle(&self) -> T {
        self.current_angle
    }

    /// Latest published angles as one snapshot.
    pub fn snapshot(&self) -> AngleSnapshot<T> {
        AngleSnapshot {
            raw: self.raw_angle,
            acute: self.current_angle,
        }
    }

    /// Whether the raw angle lies past vertical (`raw > 90`), the
    /// quadrant signal consumers combine with device orientation.
    pub fn is_obtuse(&self) -> bool {
        self.raw_angle > T::from(90.0).unwrap()
    }

    /// Whether the acute angle matches `target` within `margin`,
    /// boundary inclusive.
    pub fn is_within_margin(&self, target: T, margin: T) -> bool {
        within_margin(target, self.current_angle, margin)
    }

    /// Nominal spacing between samples from the driving source, in
    /// seconds.
    pub fn sample_interval(&self) -> T {
        self.sample_rate_hz.recip()
    }

    /// The normalized device mounting axis.
    pub fn device_axis(&self) -> [T; 3] {
        self.device_axis
    }
}
