//! Internal-resistance battery model and state-of-charge recurrence.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::EnergyModel;

/// Per-sample electrical state of the battery.
///
/// State of charge is the plain physics recurrence and is deliberately not
/// clamped: a demand profile the pack cannot sustain will push it outside
/// [0, 1], which callers must read as a modeling artifact, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryTrace {
    /// Battery terminal power demand (W).
    pub power: Vec<f64>,
    /// State of charge, fraction of capacity.
    pub state_of_charge: Vec<f64>,
    /// Capacity drawn per step (Ah); negative while charging.
    pub capacity_supplied: Vec<f64>,
}

impl EnergyModel {
    /// Battery power for a single wheel-power sample.
    ///
    /// Losses flow in the demand direction: driving divides by the drivetrain
    /// efficiency, regeneration multiplies by it. Standby losses are drawn
    /// either way.
    pub fn battery_power(&self, wheel_power: f64) -> f64 {
        let eff = self.params().efficiency_drivetrain();
        let standby = self.params().standby_losses;
        if wheel_power >= 0.0 {
            wheel_power / eff + standby
        } else {
            wheel_power * eff + standby
        }
    }

    /// Step the battery through a wheel-power trace.
    ///
    /// The current is the low branch of the internal-resistance quadratic,
    /// `I = (V - sqrt(V^2 - 4*R*P)) / (2*R)`. A negative discriminant means
    /// the pack cannot deliver the requested power at this voltage and
    /// resistance; that step holds the previous step's implied current
    /// (`3600 * capacity_supplied[t-1] / dt`) instead of failing. This is a
    /// numerical-infeasibility recovery, not a physical result.
    pub fn battery_trace(&self, wheel_power: &[f64]) -> BatteryTrace {
        let params = self.params();
        let n = wheel_power.len();
        let mut power = vec![0.0; n];
        let mut capacity_supplied = vec![0.0; n];
        let mut state_of_charge = vec![0.0; n];
        if n > 0 {
            state_of_charge[0] = params.soc_initial;
        }

        let voltage = params.nominal_voltage;
        let resistance = params.resistance;

        for t in 0..n {
            power[t] = self.battery_power(wheel_power[t]);

            let discriminant = voltage * voltage - 4.0 * resistance * power[t];
            let current = if discriminant >= 0.0 {
                (voltage - discriminant.sqrt()) / (2.0 * resistance)
            } else {
                let previous = if t > 0 { capacity_supplied[t - 1] } else { 0.0 };
                debug!(
                    "battery power demand {:.1} W infeasible at {:.0} V, holding previous current",
                    power[t], voltage
                );
                3600.0 * previous / params.dt
            };

            capacity_supplied[t] = current * params.dt / 3600.0;
            if t > 0 {
                state_of_charge[t] =
                    state_of_charge[t - 1] - capacity_supplied[t] / params.capacity;
            }
        }

        BatteryTrace {
            power,
            state_of_charge,
            capacity_supplied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VehicleParameters;
    use approx::assert_relative_eq;

    fn model_with(params: VehicleParameters) -> EnergyModel {
        EnergyModel::new(params).unwrap()
    }

    #[test]
    fn battery_power_loss_direction_is_asymmetric() {
        let params = VehicleParameters::default()
            .with_efficiencies(0.9, 0.9)
            .with_battery(350.0, 0.1, 60.0);
        let model = model_with(params);
        let eff = 0.81;

        assert_relative_eq!(
            model.battery_power(1000.0),
            1000.0 / eff + 300.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            model.battery_power(-1000.0),
            -1000.0 * eff + 300.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn soc_starts_at_initial_and_decreases_under_load() {
        let model = model_with(VehicleParameters::default());
        let trace = model.battery_trace(&[5000.0; 20]);

        assert_eq!(trace.state_of_charge[0], 0.5);
        for t in 1..20 {
            assert!(trace.state_of_charge[t] < trace.state_of_charge[t - 1]);
        }
    }

    #[test]
    fn infeasible_demand_holds_previous_current() {
        // 10 V / 1 ohm pack: feasible up to V^2 / 4R = 25 W at the terminals.
        let mut params = VehicleParameters::default()
            .with_battery(10.0, 1.0, 1.0)
            .with_efficiencies(1.0, 1.0);
        params.standby_losses = 0.0;
        let model = model_with(params);

        let trace = model.battery_trace(&[9.0, 100.0]);

        // First step solves the quadratic: I = (10 - sqrt(100 - 36)) / 2 = 1 A.
        let dt = 0.5;
        assert_eq!(trace.capacity_supplied[0], 1.0 * dt / 3600.0);
        // Second step's discriminant is negative; the held current must be
        // exactly the previous step's implied current, bit for bit.
        let held_current = 3600.0 * trace.capacity_supplied[0] / dt;
        assert_eq!(trace.capacity_supplied[1], held_current * dt / 3600.0);
    }

    #[test]
    fn infeasible_first_step_falls_back_to_zero_current() {
        let mut params = VehicleParameters::default()
            .with_battery(10.0, 1.0, 1.0)
            .with_efficiencies(1.0, 1.0);
        params.standby_losses = 0.0;
        let model = model_with(params);

        let trace = model.battery_trace(&[100.0]);
        assert_eq!(trace.capacity_supplied[0], 0.0);
        assert_eq!(
            trace.state_of_charge[0],
            VehicleParameters::default().soc_initial
        );
    }

    #[test]
    fn regeneration_raises_state_of_charge() {
        let mut params = VehicleParameters::default();
        params.standby_losses = 0.0;
        let model = model_with(params);

        let trace = model.battery_trace(&[0.0, -20000.0]);
        assert!(trace.capacity_supplied[1] < 0.0);
        assert!(trace.state_of_charge[1] > trace.state_of_charge[0]);
    }

    #[test]
    fn empty_trace_yields_empty_outputs() {
        let model = model_with(VehicleParameters::default());
        let trace = model.battery_trace(&[]);
        assert!(trace.power.is_empty());
        assert!(trace.state_of_charge.is_empty());
    }
}
