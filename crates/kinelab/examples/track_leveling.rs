//! Track Leveling Example
//!
//! Demonstrates the angle-estimation half of a kinematics session:
//! - Feeding gravity-direction samples at sensor rate
//! - Watching the low-pass filter converge on the true inclination
//! - Checking the reading against a target angle with a margin preset
//!
//! The motion source is simulated here: a device resting on a 15°
//! incline with a little sensor noise.

use kinelab::prelude::*;

fn main() -> Result<(), KinelabError> {
    println!("{}", "=".repeat(70));
    println!("Kinelab Track Leveling Example");
    println!("{}", "=".repeat(70));
    println!();

    let mut angle = AngleEstimatorBuilder::new()
        .alpha(0.15)
        .sample_rate_hz(60.0)
        .build()?;
    angle.start();

    // Simulated gravity for a 15° incline, with deterministic jitter.
    let target = 15.0f64;
    let phi = (90.0 - target).to_radians();
    for k in 0..300 {
        let jitter = 0.002 * ((k as f64) * 0.7).sin();
        let gravity = [phi.sin() + jitter, phi.cos() - jitter, 0.0];
        let snapshot = angle.on_sample(gravity)?;

        if k % 60 == 0 {
            if let Some(s) = snapshot {
                println!("t = {:>4.1}s  raw = {:>7.3}°  acute = {:>6.3}°", k as f64 / 60.0, s.raw, s.acute);
            }
        }
    }
    angle.stop();

    println!();
    let margin = MarginPreset::PointTwoFive.value::<f64>();
    println!("Final angle: {:.3}° (target {target}°, margin ±{margin}°)", angle.current_angle());
    if angle.is_within_margin(target, margin) {
        println!("Track is level with the target. Ready to measure.");
    } else {
        println!("Keep adjusting the track.");
    }

    Ok(())
}
