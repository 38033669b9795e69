//! Vehicle physical description.

use serde::{Deserialize, Serialize};
use simcore::ConfigError;
use simcore::error::check_timestep;

/// m/s to mph. The road-load coefficients are mph-based dynamometer values.
pub const MPH_PER_MPS: f64 = 2.23694;
/// lbf to N, applied to the road-load polynomial output.
pub const LBF_TO_NEWTON: f64 = 4.44822;
/// Rotational-inertia allowance on the test weight.
pub const ROTATIONAL_INERTIA_FACTOR: f64 = 1.03;

/// Immutable physical description of the simulated vehicle.
///
/// Loaded externally and handed in once per run; never mutated afterwards,
/// so a single instance can be shared read-only across concurrent runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleParameters {
    /// Test weight (kg).
    pub test_weight: f64,
    /// Dynamometer road-load coefficients a, b, c (lbf, lbf/mph, lbf/mph^2).
    pub road_load_abc: [f64; 3],
    /// Nominal battery voltage (V).
    pub nominal_voltage: f64,
    /// Battery internal resistance (ohm).
    pub resistance: f64,
    /// Battery capacity (Ah).
    pub capacity: f64,
    /// Transmission efficiency, (0, 1].
    pub efficiency_transmission: f64,
    /// Motor efficiency, (0, 1].
    pub efficiency_motor: f64,
    /// Standby electrical loss (W), drawn regardless of wheel demand.
    pub standby_losses: f64,
    /// Initial state of charge, fraction of capacity.
    pub soc_initial: f64,
    /// Fixed simulation timestep (s).
    pub dt: f64,
}

impl Default for VehicleParameters {
    /// Midsize-EV preset: the reference 2000 kg test weight and HWY-cycle
    /// road-load coefficients, with a representative 350 V pack.
    fn default() -> Self {
        VehicleParameters {
            test_weight: 2000.0,
            road_load_abc: [23.3637, 0.3946, 0.01245],
            nominal_voltage: 350.0,
            resistance: 0.1,
            capacity: 60.0,
            efficiency_transmission: 0.97,
            efficiency_motor: 0.91,
            standby_losses: 300.0,
            soc_initial: 0.5,
            dt: 0.5,
        }
    }
}

impl VehicleParameters {
    /// Set the battery pack electrical characteristics.
    pub fn with_battery(mut self, voltage: f64, resistance: f64, capacity: f64) -> Self {
        self.nominal_voltage = voltage;
        self.resistance = resistance;
        self.capacity = capacity;
        self
    }

    /// Set the drivetrain efficiencies.
    pub fn with_efficiencies(mut self, transmission: f64, motor: f64) -> Self {
        self.efficiency_transmission = transmission;
        self.efficiency_motor = motor;
        self
    }

    /// Set the simulation timestep.
    pub fn with_timestep(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Combined drivetrain efficiency.
    pub fn efficiency_drivetrain(&self) -> f64 {
        self.efficiency_transmission * self.efficiency_motor
    }

    /// Effective inertial mass, including the rotational allowance (kg).
    pub fn modeled_mass(&self) -> f64 {
        ROTATIONAL_INERTIA_FACTOR * self.test_weight
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_timestep(self.dt)?;
        if !(self.nominal_voltage > 0.0) {
            return Err(ConfigError::NonPositiveVoltage(self.nominal_voltage));
        }
        if !(self.resistance > 0.0) {
            return Err(ConfigError::NonPositiveResistance(self.resistance));
        }
        if !(self.capacity > 0.0) {
            return Err(ConfigError::NonPositiveCapacity(self.capacity));
        }
        for eff in [self.efficiency_transmission, self.efficiency_motor] {
            if !(eff > 0.0 && eff <= 1.0) {
                return Err(ConfigError::InvalidEfficiency(eff));
            }
        }
        Ok(())
    }
}
