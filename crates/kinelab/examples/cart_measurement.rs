//! Cart Measurement Example
//!
//! Demonstrates the measurement half of a kinematics session:
//! - Pushing simulated motion samples through the bounded queue
//! - Integrating along-track acceleration into a distance trace
//! - The zero-velocity snap at the end of a run
//! - Exporting the trace as CSV
//!
//! The simulated cart accelerates down the track, coasts, and is
//! caught at the bottom.

use kinelab::prelude::*;

const G0: f64 = 9.80665;

fn main() -> Result<(), KinelabError> {
    println!("{}", "=".repeat(70));
    println!("Kinelab Cart Measurement Example");
    println!("{}", "=".repeat(70));
    println!();

    let mut queue = SampleQueue::with_capacity(128)?;
    let axis = [0.0, 1.0, 0.0];

    // 2 seconds of acceleration at 0.8 m/s², then braking to a stop.
    let mut t = 300.0;
    for _ in 0..20 {
        queue.push(MotionSample::new([0.0, 1.0, 0.0], [0.0, -0.8 / G0, 0.0], t));
        t += 0.1;
    }
    for _ in 0..19 {
        queue.push(MotionSample::new([0.0, 1.0, 0.0], [0.0, 0.8 / G0, 0.0], t));
        t += 0.1;
    }

    let mut cart = KinematicsIntegratorBuilder::new()
        .sample_rate_hz(10.0)
        .build()?;
    cart.start();

    while let Some(sample) = queue.pop() {
        cart.on_sample(sample.user_accel_along(&axis), sample.timestamp)?;
    }

    println!("Elapsed:  {:.2} s", cart.elapsed());
    println!("Distance: {:.3} m", cart.distance());
    println!("Residual velocity before stop: {:.3} m/s", cart.velocity());

    if let Some(terminal) = cart.stop() {
        println!("Zero-velocity snap appended a terminal split at t = {:.1} s", terminal.time_elapsed);
    }

    println!();
    println!("CSV export ({} splits):", cart.splits().len());
    for line in cart.export_csv().lines().take(5) {
        println!("  {line}");
    }
    println!("  ...");

    Ok(())
}
