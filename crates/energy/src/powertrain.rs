//! Road load and wheel power from the quasi-static longitudinal model.

use serde::{Deserialize, Serialize};
use simcore::TraceError;
use simcore::error::check_length;

use crate::EnergyModel;
use crate::vehicle::{LBF_TO_NEWTON, MPH_PER_MPS};

/// Per-sample mechanical demand at the wheel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerTrace {
    /// Road-load force (N).
    pub road_load: Vec<f64>,
    /// Power at the wheel (W); negative under regenerative demand.
    pub wheel_power: Vec<f64>,
}

impl EnergyModel {
    /// Road-load force at a given speed (m/s).
    ///
    /// The a/b/c coefficients come from a dynamometer coastdown in mph and
    /// lbf, so the speed is converted to mph before evaluating the polynomial
    /// and the result converted back to newtons. That unit convention is part
    /// of the coefficient contract and has to stay exact.
    pub fn road_load_force(&self, speed: f64) -> f64 {
        let [a, b, c] = self.params().road_load_abc;
        let speed_mph = MPH_PER_MPS * speed;
        (a + b * speed_mph + c * speed_mph * speed_mph) * LBF_TO_NEWTON
    }

    /// Wheel power demand for a motion trajectory.
    ///
    /// `wheel_power[i] = (modeled_mass * acceleration[i] + road_load[i]) * speed[i]`
    /// with SI speed. Speed and acceleration traces must be index-aligned.
    pub fn power_at_wheel(
        &self,
        speed: &[f64],
        acceleration: &[f64],
    ) -> Result<PowerTrace, TraceError> {
        check_length(speed.len(), acceleration.len())?;

        let mass = self.params().modeled_mass();
        let road_load: Vec<f64> = speed.iter().map(|&v| self.road_load_force(v)).collect();
        let wheel_power = speed
            .iter()
            .zip(acceleration)
            .zip(&road_load)
            .map(|((&v, &a), &f)| (mass * a + f) * v)
            .collect();

        Ok(PowerTrace {
            road_load,
            wheel_power,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VehicleParameters;
    use approx::assert_relative_eq;

    fn model() -> EnergyModel {
        EnergyModel::new(VehicleParameters::default()).unwrap()
    }

    #[test]
    fn road_load_at_standstill_is_the_constant_term() {
        let model = model();
        let [a, _, _] = model.params().road_load_abc;
        assert_relative_eq!(model.road_load_force(0.0), a * LBF_TO_NEWTON);
    }

    #[test]
    fn road_load_uses_mph_coefficients() {
        let model = model();
        let [a, b, c] = model.params().road_load_abc;
        let v = 10.0; // m/s
        let mph = MPH_PER_MPS * v;
        let expected = (a + b * mph + c * mph * mph) * LBF_TO_NEWTON;
        assert_relative_eq!(model.road_load_force(v), expected, epsilon = 1e-9);
    }

    #[test]
    fn wheel_power_is_zero_at_standstill() {
        let model = model();
        let trace = model.power_at_wheel(&[0.0], &[2.0]).unwrap();
        assert_eq!(trace.wheel_power[0], 0.0);
    }

    #[test]
    fn braking_produces_negative_wheel_power() {
        let model = model();
        // Hard braking at speed: inertial term dominates road load.
        let trace = model.power_at_wheel(&[20.0], &[-3.0]).unwrap();
        assert!(trace.wheel_power[0] < 0.0);
    }

    #[test]
    fn cruise_power_matches_closed_form() {
        let model = model();
        let v = 15.0;
        let trace = model.power_at_wheel(&[v], &[0.0]).unwrap();
        assert_relative_eq!(
            trace.wheel_power[0],
            model.road_load_force(v) * v,
            epsilon = 1e-9
        );
    }

    #[test]
    fn rejects_mismatched_trace_lengths() {
        let model = model();
        assert_eq!(
            model.power_at_wheel(&[0.0, 1.0], &[0.0]).unwrap_err(),
            TraceError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
