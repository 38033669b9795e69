//! Vehicle energy model
//!
//! Maps a motion trajectory (speed, acceleration) to road-load force, wheel
//! power, battery power and state-of-charge evolution, plus an equivalent
//! fuel-economy summary. Quasi-static longitudinal dynamics in front of an
//! internal-resistance battery model, stepped at the fixed simulation rate.

pub mod battery;
pub mod economy;
pub mod powertrain;
pub mod vehicle;

pub use battery::BatteryTrace;
pub use economy::mpge;
pub use powertrain::PowerTrace;
pub use vehicle::VehicleParameters;

use simcore::ConfigError;

/// Energy/battery capability of a vehicle.
///
/// Owned by whichever role needs it: a standard vehicle driving the cycle
/// itself, or an autonomous follower whose trajectory came out of a
/// controller. Construction validates the parameters; a model that exists is
/// safe to run.
#[derive(Debug, Clone)]
pub struct EnergyModel {
    params: VehicleParameters,
}

impl EnergyModel {
    pub fn new(params: VehicleParameters) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(EnergyModel { params })
    }

    pub fn params(&self) -> &VehicleParameters {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_parameters() {
        let mut params = VehicleParameters::default();
        params.capacity = 0.0;
        assert_eq!(
            EnergyModel::new(params).unwrap_err(),
            ConfigError::NonPositiveCapacity(0.0)
        );
    }
}
