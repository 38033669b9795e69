//! Finite-difference recovery of speed and acceleration from a position trace.
//!
//! Used when a drive cycle records only absolute distance and no ground-truth
//! speed column is available. Assumes a uniform timestep; a non-uniform
//! recording has to be resampled upstream.

use crate::error::{SimError, TraceError, check_timestep};

/// Derive speed and acceleration traces from a position trace.
///
/// Both outputs have the same length as `position`. The first speed sample is
/// a seed value of zero (there is no earlier position to difference against),
/// and the last acceleration sample stays zero for the same reason:
///
/// - `speed[i + 1] = (position[i + 1] - position[i]) / dt`
/// - `acceleration[i] = (speed[i + 1] - speed[i]) / dt`
pub fn speed_and_acceleration(position: &[f64], dt: f64) -> Result<(Vec<f64>, Vec<f64>), SimError> {
    check_timestep(dt)?;
    if position.is_empty() {
        return Err(TraceError::Empty.into());
    }

    let n = position.len();
    let mut speed = vec![0.0; n];
    let mut acceleration = vec![0.0; n];

    for p in 0..n - 1 {
        speed[p + 1] = (position[p + 1] - position[p]) / dt;
    }
    for s in 0..n - 1 {
        acceleration[s] = (speed[s + 1] - speed[s]) / dt;
    }

    Ok((speed, acceleration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_ramp_recovers_constant_speed() {
        // 8 m/s for 0.5 s steps: position grows by 4 m per sample.
        let dt = 0.5;
        let position: Vec<f64> = (0..10).map(|i| 4.0 * i as f64).collect();

        let (speed, acceleration) = speed_and_acceleration(&position, dt).unwrap();

        assert_eq!(speed.len(), position.len());
        assert_eq!(speed[0], 0.0);
        for v in &speed[1..] {
            assert_relative_eq!(*v, 8.0, epsilon = 1e-12);
        }
        // Interior acceleration is zero; index 0 carries the seed-speed jump.
        for a in &acceleration[1..] {
            assert_relative_eq!(*a, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn last_acceleration_entry_stays_zero() {
        let position = vec![0.0, 1.0, 3.0, 6.0];
        let (_, acceleration) = speed_and_acceleration(&position, 1.0).unwrap();
        assert_eq!(*acceleration.last().unwrap(), 0.0);
    }

    #[test]
    fn rejects_empty_trace() {
        let err = speed_and_acceleration(&[], 0.5).unwrap_err();
        assert_eq!(err, SimError::Trace(TraceError::Empty));
    }

    #[test]
    fn rejects_non_positive_timestep() {
        assert!(speed_and_acceleration(&[0.0, 1.0], 0.0).is_err());
        assert!(speed_and_acceleration(&[0.0, 1.0], -0.5).is_err());
    }
}
