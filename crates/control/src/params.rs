//! Gap, headway and acceleration settings shared by the two controllers.

use serde::{Deserialize, Serialize};
use simcore::ConfigError;

/// Immutable controller configuration, validated before a run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlParameters {
    /// Desired steady-state gap to the lead vehicle (m).
    pub gap_target: f64,
    /// Minimum safe gap; below this the safety branch takes over (m).
    pub gap_min: f64,
    /// Desired time gap for the headway-aware mode (s).
    pub headway_target: f64,
    /// Minimum time gap for the headway-aware mode (s).
    pub headway_min: f64,
    /// Lower acceleration saturation (m/s^2).
    pub acceleration_min: f64,
    /// Upper acceleration saturation (m/s^2).
    pub acceleration_max: f64,
    /// Proportional gain of the classic controller.
    pub kp: f64,
    /// Derivative gain of the classic controller.
    pub kd: f64,
}

impl Default for ControlParameters {
    fn default() -> Self {
        ControlParameters {
            gap_target: 5.0,
            gap_min: 1.0,
            headway_target: 5.0,
            headway_min: 1.0,
            acceleration_min: -3.0,
            acceleration_max: 3.0,
            kp: 1.0,
            kd: 1.0,
        }
    }
}

impl ControlParameters {
    /// Set the distance-gap targets.
    pub fn with_gaps(mut self, target: f64, min: f64) -> Self {
        self.gap_target = target;
        self.gap_min = min;
        self
    }

    /// Set the time-gap targets.
    pub fn with_headways(mut self, target: f64, min: f64) -> Self {
        self.headway_target = target;
        self.headway_min = min;
        self
    }

    /// Set the acceleration saturation bounds.
    pub fn with_acceleration_bounds(mut self, min: f64, max: f64) -> Self {
        self.acceleration_min = min;
        self.acceleration_max = max;
        self
    }

    /// Set the classic-controller PD gains.
    pub fn with_gains(mut self, kp: f64, kd: f64) -> Self {
        self.kp = kp;
        self.kd = kd;
        self
    }

    /// Validate the configuration.
    ///
    /// The bound operation `max(min(x, accel_max), accel_min)` silently
    /// collapses to `accel_min` when the bounds are inverted, so inversion is
    /// rejected here instead of being left to the clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.acceleration_min > self.acceleration_max {
            return Err(ConfigError::InvertedAccelerationBounds {
                min: self.acceleration_min,
                max: self.acceleration_max,
            });
        }
        for gap in [self.gap_target, self.gap_min] {
            if !(gap > 0.0) {
                return Err(ConfigError::NonPositiveGap(gap));
            }
        }
        for headway in [self.headway_target, self.headway_min] {
            if !(headway > 0.0) {
                return Err(ConfigError::NonPositiveHeadway(headway));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(ControlParameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_acceleration_bounds() {
        let params = ControlParameters::default().with_acceleration_bounds(3.0, -3.0);
        assert_eq!(
            params.validate().unwrap_err(),
            ConfigError::InvertedAccelerationBounds {
                min: 3.0,
                max: -3.0
            }
        );
    }

    #[test]
    fn rejects_non_positive_gaps_and_headways() {
        assert!(
            ControlParameters::default()
                .with_gaps(0.0, 1.0)
                .validate()
                .is_err()
        );
        assert!(
            ControlParameters::default()
                .with_headways(5.0, -1.0)
                .validate()
                .is_err()
        );
    }
}
