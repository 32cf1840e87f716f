//! 3-component vector helpers.
//!
//! ## Purpose
//!
//! This module provides the handful of vector operations the angle
//! path needs: dot product, magnitude, and guarded normalization.
//! Vectors are plain `[T; 3]` arrays; no linear-algebra dependency is
//! warranted at this scale.
//!
//! ## Design notes
//!
//! * **Guarded normalization**: `normalize` returns `None` for
//!   degenerate vectors instead of producing NaN components.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `normalize(v)` returns a unit vector or `None`; it never returns
//!   a vector containing non-finite components for finite input.
//!
//! ## Non-goals
//!
//! * General linear algebra (matrices, rotations, quaternions).

// External dependencies
use num_traits::Float;

/// Magnitude below which a vector is considered degenerate.
///
/// Well above `T::epsilon()` so that near-zero sensor glitches are
/// caught before division amplifies them.
const DEGENERATE_EPS: f64 = 1e-9;

/// Dot product of two 3-vectors.
#[inline]
pub fn dot<T: Float>(a: &[T; 3], b: &[T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean magnitude of a 3-vector.
#[inline]
pub fn magnitude<T: Float>(v: &[T; 3]) -> T {
    dot(v, v).sqrt()
}

/// Normalize a 3-vector to unit length.
///
/// Returns `None` when the magnitude is too small to divide by.
#[inline]
pub fn normalize<T: Float>(v: &[T; 3]) -> Option<[T; 3]> {
    let mag = magnitude(v);
    let eps = T::from(DEGENERATE_EPS).unwrap_or_else(T::epsilon);
    if !mag.is_finite() || mag < eps {
        return None;
    }
    Some([v[0] / mag, v[1] / mag, v[2] / mag])
}

/// Scale a 3-vector by a scalar.
#[inline]
pub fn scale<T: Float>(v: &[T; 3], k: T) -> [T; 3] {
    [v[0] * k, v[1] * k, v[2] * k]
}
