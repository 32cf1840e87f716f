//! Tests for output records and CSV export.
//!
//! The CSV rendering is a measurement-fidelity contract: 4 decimal
//! places for time, 5 for distance, header `time_s,distance_m`, rows
//! newline-joined with no trailing newline.
//!
//! ## Test Organization
//!
//! 1. **Format Contract** - Exact rendering of known traces
//! 2. **Edge Cases** - Empty traces, single rows
//! 3. **Precision** - Both float widths render identically

use kinelab::prelude::*;

// ============================================================================
// Format Contract Tests
// ============================================================================

/// Test the exact rendering of a two-split trace.
#[test]
fn test_csv_exact_rendering() {
    let splits = [
        DistanceSplit {
            time_elapsed: 0.0,
            displacement: 0.0,
            acceleration: 0.0,
        },
        DistanceSplit {
            time_elapsed: 0.1,
            displacement: 0.05,
            acceleration: 1.0,
        },
    ];

    assert_eq!(
        splits_to_csv(&splits),
        "time_s,distance_m\n0.0000,0.00000\n0.1000,0.05000"
    );
}

/// Test that acceleration is not part of the export.
#[test]
fn test_csv_omits_acceleration() {
    let splits = [DistanceSplit {
        time_elapsed: 1.25,
        displacement: 2.5,
        acceleration: 9.75,
    }];

    assert_eq!(splits_to_csv(&splits), "time_s,distance_m\n1.2500,2.50000");
}

/// Test there is no trailing newline.
#[test]
fn test_csv_no_trailing_newline() {
    let splits = [DistanceSplit {
        time_elapsed: 0.5,
        displacement: 0.25,
        acceleration: 0.0,
    }];

    assert!(!splits_to_csv(&splits).ends_with('\n'));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test an empty trace renders the bare header.
#[test]
fn test_csv_empty_trace() {
    let splits: [DistanceSplit<f64>; 0] = [];
    assert_eq!(splits_to_csv(&splits), "time_s,distance_m");
}

/// Test a duplicated trailing split (the snap marker) renders as two
/// identical rows.
#[test]
fn test_csv_snap_duplicate_rows() {
    let splits = [
        DistanceSplit {
            time_elapsed: 2.0,
            displacement: 1.5,
            acceleration: 0.75,
        },
        DistanceSplit {
            time_elapsed: 2.0,
            displacement: 1.5,
            acceleration: 0.0,
        },
    ];

    assert_eq!(
        splits_to_csv(&splits),
        "time_s,distance_m\n2.0000,1.50000\n2.0000,1.50000"
    );
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test the f32 trace renders with the same fixed precision.
#[test]
fn test_csv_f32_precision() {
    let splits = [DistanceSplit::<f32> {
        time_elapsed: 0.5,
        displacement: 0.25,
        acceleration: 0.0,
    }];

    assert_eq!(splits_to_csv(&splits), "time_s,distance_m\n0.5000,0.25000");
}
