//! Margin-of-error comparison utilities.
//!
//! ## Purpose
//!
//! This module decides whether a measured angle matches a target angle
//! within a tolerance band, and carries the preset tolerance ladder
//! offered to users.
//!
//! ## Design notes
//!
//! * **Boundary-inclusive**: a difference exactly equal to the margin
//!   is a match (`<=`, not `<`).
//!
//! ## Non-goals
//!
//! * Angular wrap-around handling; inputs are already folded into
//!   `[0, 90]` by the angle path.

// External dependencies
use num_traits::Float;

/// Whether `value` lies within `margin` of `target`, inclusive.
#[inline]
pub fn within_margin<T: Float>(target: T, value: T, margin: T) -> bool {
    (target - value).abs() <= margin
}

// ============================================================================
// Preset Margins
// ============================================================================

/// Preset margin-of-error choices, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginPreset {
    /// ±0.05°
    PointZeroFive,
    /// ±0.1°
    PointOne,
    /// ±0.25°
    PointTwoFive,
    /// ±0.5°
    PointFive,
    /// ±1.0°
    One,
}

impl MarginPreset {
    /// All presets, tightest first.
    pub const ALL: [MarginPreset; 5] = [
        MarginPreset::PointZeroFive,
        MarginPreset::PointOne,
        MarginPreset::PointTwoFive,
        MarginPreset::PointFive,
        MarginPreset::One,
    ];

    /// The margin value in degrees.
    pub fn value<T: Float>(&self) -> T {
        let degrees = match self {
            MarginPreset::PointZeroFive => 0.05,
            MarginPreset::PointOne => 0.1,
            MarginPreset::PointTwoFive => 0.25,
            MarginPreset::PointFive => 0.5,
            MarginPreset::One => 1.0,
        };
        T::from(degrees).unwrap_or_else(T::zero)
    }
}

impl Default for MarginPreset {
    fn default() -> Self {
        MarginPreset::PointOne
    }
}
