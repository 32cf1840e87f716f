//! Exponential low-pass filtering.
//!
//! ## Purpose
//!
//! This module provides the incremental exponential moving average used
//! to stabilize the per-sample inclination angle. The raw angle is
//! noisy at sensor rate; the filter trades a little latency for a
//! stable reading.
//!
//! ## Design notes
//!
//! * **Incremental**: `y' = α·x + (1−α)·y`, O(1) per sample, no
//!   history buffer.
//! * **Zero-initialized**: The state starts at zero, which produces a
//!   brief convergence transient on the first samples. That transient
//!   is part of the published behavior and is not corrected here;
//!   callers that want a fresh transient per session reset explicitly.
//!
//! ## Key concepts
//!
//! * **Alpha**: weight of the newest sample. Higher alpha follows the
//!   input faster but passes more noise through.
//!
//! ## Invariants
//!
//! * For constant input `R` and `α ∈ (0, 1)`, the state converges
//!   monotonically to `R`.
//!
//! ## Non-goals
//!
//! * Frequency-domain design (cutoff specification, Bode analysis).
//! * Multi-pole or adaptive filtering.

// External dependencies
use num_traits::Float;

// ============================================================================
// Low-Pass Filter
// ============================================================================

/// First-order exponential low-pass filter.
#[derive(Debug, Clone, Copy)]
pub struct LowPass<T> {
    alpha: T,
    state: T,
}

impl<T: Float> LowPass<T> {
    /// Create a filter with the given smoothing coefficient and a
    /// zero-initialized state.
    ///
    /// Alpha is assumed already validated to lie in (0, 1); the engine
    /// builders enforce this before construction.
    pub fn new(alpha: T) -> Self {
        Self {
            alpha,
            state: T::zero(),
        }
    }

    /// Feed one raw value and return the updated filtered value.
    #[inline]
    pub fn apply(&mut self, raw: T) -> T {
        self.state = self.alpha * raw + (T::one() - self.alpha) * self.state;
        self.state
    }

    /// Current filtered value.
    pub fn value(&self) -> T {
        self.state
    }

    /// Smoothing coefficient.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Reset the state to zero, restoring the initial transient.
    pub fn reset(&mut self) {
        self.state = T::zero();
    }

    /// Reset the state to a specific value.
    pub fn reset_to(&mut self, value: T) {
        self.state = value;
    }
}
