//! # Kinelab — Inclination & Cart Kinematics for Rust
//!
//! A small numeric core for track-and-cart kinematics experiments. It
//! turns a stream of raw motion-sensor readings into two physical
//! quantities:
//!
//! - a **stable inclination angle** of a device mounted on a track,
//!   used to confirm the track matches a chosen target angle, and
//! - a **time-distance trace** of a cart's travel along the track,
//!   obtained by double-integrating along-track acceleration.
//!
//! The crate deliberately contains no sensor drivers and no UI glue:
//! a motion source feeds [`MotionSample`](prelude::MotionSample)s in,
//! and a presentation layer reads snapshots and split traces out.
//!
//! ## Quick Start
//!
//! ### Angle estimation
//!
//! ```rust
//! use kinelab::prelude::*;
//!
//! let mut angle = AngleEstimatorBuilder::<f64>::new()
//!     .alpha(0.15)            // smoothing coefficient
//!     .sample_rate_hz(60.0)   // nominal update rate of the source
//!     .build()?;
//!
//! angle.start();
//!
//! // Gravity perpendicular to the mounting axis: the track is flat.
//! for _ in 0..200 {
//!     angle.on_sample([1.0, 0.0, 0.0])?;
//! }
//! assert!(angle.current_angle() < 0.5);
//! assert!(angle.is_within_margin(0.0, 0.5));
//!
//! angle.stop();
//! # Result::<(), KinelabError>::Ok(())
//! ```
//!
//! ### Distance measurement
//!
//! ```rust
//! use kinelab::prelude::*;
//!
//! let mut cart = KinematicsIntegratorBuilder::<f64>::new()
//!     .sample_rate_hz(10.0)
//!     .build()?;
//!
//! cart.start();
//! // Along-track user acceleration in g units, monotonic timestamps.
//! cart.on_sample(-0.05, 100.0)?;
//! cart.on_sample(-0.05, 100.1)?;
//! cart.on_sample(-0.05, 100.2)?;
//! cart.stop();
//!
//! let csv = cart.export_csv();
//! assert!(csv.starts_with("time_s,distance_m"));
//! # Result::<(), KinelabError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Sample handlers return `Result<Option<..>, KinelabError>`: `Ok(None)`
//! when the component is idle and the sample was not consumed, `Ok(Some(..))`
//! with the freshly computed snapshot or split, and `Err(..)` for
//! degenerate or non-finite input. Previous outputs are always retained
//! on error; a NaN never reaches published state.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` targets for on-device processing.
//! Disable default features and enable `libm` for the float
//! intrinsics:
//!
//! ```toml
//! [dependencies]
//! kinelab = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! Use `f32` instead of `f64` to halve the state footprint; every
//! per-sample path is O(1) and allocation-free apart from the split
//! append.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
pub mod primitives;

// Layer 2: Math - pure mathematical functions.
pub mod math;

// Layer 3: Engine - the stateful measurement components.
pub mod engine;

// Standard kinelab prelude.
pub mod prelude {
    pub use crate::engine::angle::{AngleEstimator, AngleEstimatorBuilder, AngleSnapshot};
    pub use crate::engine::integrator::{KinematicsIntegrator, KinematicsIntegratorBuilder};
    pub use crate::engine::output::{splits_to_csv, DistanceSplit};
    pub use crate::math::filter::LowPass;
    pub use crate::math::margin::{within_margin, MarginPreset};
    pub use crate::primitives::buffer::SampleQueue;
    pub use crate::primitives::errors::KinelabError;
    pub use crate::primitives::sample::{MotionSample, Phase};
}
