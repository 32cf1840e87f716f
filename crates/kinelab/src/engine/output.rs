//! Output records and CSV export.
//!
//! ## Purpose
//!
//! This module defines the immutable split record produced by the
//! integrator and the CSV rendering of a split trace.
//!
//! ## Design notes
//!
//! * **Fixed precision**: Time is rendered with 4 decimal places and
//!   distance with 5. This is a measurement-fidelity contract with the
//!   downstream analysis tooling, not a formatting preference.
//! * **No trailing newline**: Rows are newline-joined; the last row is
//!   not terminated.
//!
//! ## Invariants
//!
//! * The header line is always `time_s,distance_m`.
//! * One row per split, in trace order.
//!
//! ## Non-goals
//!
//! * File I/O; writing the CSV anywhere is the caller's concern.
//! * General serialization of component state.

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

// ============================================================================
// Distance Split
// ============================================================================

/// One entry of the time-distance trace.
///
/// Immutable once appended. `time_elapsed` values are non-decreasing
/// across a trace except for at most one trailing duplicate produced by
/// the zero-velocity snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSplit<T> {
    /// Seconds since the first sample of the session.
    pub time_elapsed: T,

    /// Displacement along the track, m (positive down-track).
    pub displacement: T,

    /// Along-track acceleration committed at this sample, m/s².
    pub acceleration: T,
}

// ============================================================================
// CSV Export
// ============================================================================

/// CSV header line.
const CSV_HEADER: &str = "time_s,distance_m";

/// Render a split trace as CSV text.
///
/// Header line `time_s,distance_m`, then one `%.4f,%.5f` row per
/// split (time, distance), newline-joined with no trailing newline.
pub fn splits_to_csv<T: Float>(splits: &[DistanceSplit<T>]) -> String {
    let mut rows = Vec::with_capacity(splits.len() + 1);
    rows.push(String::from(CSV_HEADER));
    for split in splits {
        rows.push(format!(
            "{:.4},{:.5}",
            split.time_elapsed.to_f64().unwrap_or(f64::NAN),
            split.displacement.to_f64().unwrap_or(f64::NAN),
        ));
    }
    rows.join("\n")
}
